//! MACD (Moving Average Convergence Divergence).
//!
//! MACD Line = EMA(fast) - EMA(slow), aligned by index
//! Signal Line = EMA(signal) of the MACD Line
//! Histogram = MACD Line - Signal Line
//!
//! Default parameters: fast=12, slow=26, signal=9.
//! At least slow + signal - 1 values are needed for one output point;
//! output length: max(0, len - slow - signal + 2).

use crate::domain::indicator::ema;

pub const DEFAULT_FAST: usize = 12;
pub const DEFAULT_SLOW: usize = 26;
pub const DEFAULT_SIGNAL: usize = 9;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacdPoint {
    pub macd: f64,
    pub signal: f64,
    pub histogram: f64,
}

pub fn macd(values: &[f64], fast: usize, slow: usize, signal_period: usize) -> Vec<MacdPoint> {
    if fast == 0 || slow == 0 || signal_period == 0 {
        return Vec::new();
    }
    if values.len() < fast.max(slow) + signal_period - 1 {
        return Vec::new();
    }

    let ema_fast = ema(values, fast);
    let ema_slow = ema(values, slow);

    // Both sequences end at the last price; align them from the tail.
    let line_len = ema_fast.len().min(ema_slow.len());
    let fast_skip = ema_fast.len() - line_len;
    let slow_skip = ema_slow.len() - line_len;
    let macd_line: Vec<f64> = (0..line_len)
        .map(|i| ema_fast[fast_skip + i] - ema_slow[slow_skip + i])
        .collect();

    let signal_line = ema(&macd_line, signal_period);
    let macd_skip = macd_line.len() - signal_line.len();

    signal_line
        .iter()
        .enumerate()
        .map(|(i, &signal)| {
            let macd = macd_line[macd_skip + i];
            MacdPoint {
                macd,
                signal,
                histogram: macd - signal,
            }
        })
        .collect()
}

pub fn macd_default(values: &[f64]) -> Vec<MacdPoint> {
    macd(values, DEFAULT_FAST, DEFAULT_SLOW, DEFAULT_SIGNAL)
}
