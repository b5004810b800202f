//! Overall interpretation derived from the daily timeframe result.
//!
//! An ordered rule chain; the first matching rule wins, so an uptrend with
//! RSI above 70 falls through to the overbought rule.

use crate::domain::analysis::{TimeframeResult, Trend};

pub const UPTREND_CONFIRMED: &str =
    "Uptrend confirmed with positive momentum. RSI is still in a healthy zone.";
pub const DOWNTREND_CONTINUES: &str =
    "Downtrend continues. Market is weakened, but RSI is out of oversold territory.";
pub const OVERBOUGHT_CORRECTION: &str =
    "RSI signals overbought. A correction may be ahead; be careful with late entries.";
pub const OVERSOLD_UNCONFIRMED: &str =
    "RSI is oversold. A bottom may be forming, but there is no confirmed reversal yet.";
pub const MIXED_SIGNALS: &str = "Mixed signals. Wait for further confirmation before entering.";

/// Map the daily timeframe result to one of the five fixed interpretations.
pub fn resolve(daily: &TimeframeResult) -> &'static str {
    if daily.trend == Trend::Up && daily.macd_direction == Trend::Up && daily.rsi < 70.0 {
        UPTREND_CONFIRMED
    } else if daily.trend == Trend::Down && daily.macd_direction == Trend::Down && daily.rsi > 30.0
    {
        DOWNTREND_CONTINUES
    } else if daily.rsi > 70.0 {
        OVERBOUGHT_CORRECTION
    } else if daily.rsi < 30.0 {
        OVERSOLD_UNCONFIRMED
    } else {
        MIXED_SIGNALS
    }
}
