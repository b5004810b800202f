//! Core domain types and logic.

pub mod series;
pub mod timeframe;
pub mod asset;
pub mod indicator;
pub mod analysis;
pub mod interpretation;
pub mod pipeline;
pub mod config_validation;
pub mod error;
