//! Technical indicator implementations.
//!
//! All functions here are pure transforms over an ordered closing-price
//! slice. Outputs contain only the values past each indicator's warmup, so
//! the last element of every sequence aligns with the last input price.

pub mod ema;
pub mod rsi;
pub mod macd;

pub use ema::ema;
pub use macd::{macd, macd_default, MacdPoint, DEFAULT_FAST, DEFAULT_SIGNAL, DEFAULT_SLOW};
pub use rsi::rsi;
