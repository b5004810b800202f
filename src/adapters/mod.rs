//! Concrete implementations of the port traits.

pub mod coingecko_adapter;
pub mod csv_adapter;
pub mod file_config_adapter;
