//! Per-timeframe analysis: reduce one price series to a classified result.
//!
//! Classification policy: trend and MACD direction are always exactly Up or
//! Down, with equality classified Down. There is no neutral state.

use crate::domain::error::CryptolensError;
use crate::domain::indicator::{ema, macd_default, rsi, DEFAULT_SIGNAL, DEFAULT_SLOW};
use crate::domain::series::PriceSeries;
use std::fmt;

pub const EMA_FAST_PERIOD: usize = 9;
pub const EMA_SLOW_PERIOD: usize = 21;
pub const RSI_PERIOD: usize = 14;

/// Shortest series `analyze` accepts: the MACD slow and signal lookbacks.
pub const MIN_HISTORY: usize = DEFAULT_SLOW + DEFAULT_SIGNAL;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trend::Up => write!(f, "up"),
            Trend::Down => write!(f, "down"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RsiZone {
    Overbought,
    Oversold,
    Neutral,
}

impl RsiZone {
    pub fn from_rsi(rsi: f64) -> Self {
        if rsi > 70.0 {
            RsiZone::Overbought
        } else if rsi < 30.0 {
            RsiZone::Oversold
        } else {
            RsiZone::Neutral
        }
    }
}

impl fmt::Display for RsiZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RsiZone::Overbought => write!(f, "Overbought"),
            RsiZone::Oversold => write!(f, "Oversold"),
            RsiZone::Neutral => write!(f, "Neutral"),
        }
    }
}

/// Last valid value of each indicator sequence, aligned to the final price.
#[derive(Debug, Clone, Copy)]
pub struct IndicatorSnapshot {
    pub ema_fast: f64,
    pub ema_slow: f64,
    pub rsi: f64,
    pub macd_line: f64,
    pub macd_signal: f64,
}

/// Compute EMA9, EMA21, RSI14 and MACD(12,26,9) over `closes` and take the
/// last element of each. None when any sequence is empty.
pub fn latest_snapshot(closes: &[f64]) -> Option<IndicatorSnapshot> {
    let ema_fast = *ema(closes, EMA_FAST_PERIOD).last()?;
    let ema_slow = *ema(closes, EMA_SLOW_PERIOD).last()?;
    let rsi = *rsi(closes, RSI_PERIOD).last()?;
    let macd = *macd_default(closes).last()?;

    Some(IndicatorSnapshot {
        ema_fast,
        ema_slow,
        rsi,
        macd_line: macd.macd,
        macd_signal: macd.signal,
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimeframeResult {
    pub timeframe_label: String,
    pub last_price: f64,
    /// RSI rounded to 1 decimal.
    pub rsi: f64,
    pub trend: Trend,
    pub macd_direction: Trend,
    pub summary: String,
}

/// Analyze one timeframe's series. A series shorter than [`MIN_HISTORY`]
/// yields `InsufficientHistory` so the caller can report the timeframe as
/// unavailable without aborting its siblings.
pub fn analyze(series: &PriceSeries, label: &str) -> Result<TimeframeResult, CryptolensError> {
    let closes = series.closes();

    let insufficient = || CryptolensError::InsufficientHistory {
        timeframe: label.to_string(),
        points: closes.len(),
        minimum: MIN_HISTORY,
    };

    if closes.len() < MIN_HISTORY {
        return Err(insufficient());
    }
    let snapshot = latest_snapshot(&closes).ok_or_else(insufficient)?;
    let last_price = closes[closes.len() - 1];

    let trend = if snapshot.ema_fast > snapshot.ema_slow {
        Trend::Up
    } else {
        Trend::Down
    };
    let macd_direction = if snapshot.macd_line > snapshot.macd_signal {
        Trend::Up
    } else {
        Trend::Down
    };

    let rsi = (snapshot.rsi * 10.0).round() / 10.0;
    let zone = RsiZone::from_rsi(rsi);
    let ema_phrase = match trend {
        Trend::Up => "EMA9 above EMA21 (uptrend)",
        Trend::Down => "EMA9 below EMA21 (downtrend)",
    };
    let summary = format!(
        "Price: ${last_price:.2} | RSI: {rsi:.1} ({zone}) | {ema_phrase} | MACD signals {macd_direction}"
    );

    Ok(TimeframeResult {
        timeframe_label: label.to_string(),
        last_price,
        rsi,
        trend,
        macd_direction,
        summary,
    })
}
