//! Timeframe definitions: a (lookback window, sampling interval) pair.

use crate::domain::error::CryptolensError;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleInterval {
    Hourly,
    Daily,
}

impl SampleInterval {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "hourly" => Some(SampleInterval::Hourly),
            "daily" => Some(SampleInterval::Daily),
            _ => None,
        }
    }
}

impl fmt::Display for SampleInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleInterval::Hourly => write!(f, "hourly"),
            SampleInterval::Daily => write!(f, "daily"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeframe {
    pub label: String,
    pub days: u32,
    pub interval: SampleInterval,
}

impl Timeframe {
    pub fn new(label: &str, days: u32, interval: SampleInterval) -> Self {
        Self {
            label: label.to_string(),
            days,
            interval,
        }
    }

    /// The timeframe that drives the overall interpretation. The `daily`
    /// label wins; interval is the fallback used when no label matches.
    pub fn is_daily_label(&self) -> bool {
        self.label.eq_ignore_ascii_case("daily")
    }
}

/// Parse a comma-separated `label:days:interval` list, e.g.
/// `4h:14:hourly,daily:30:daily,weekly:180:daily`.
pub fn parse_timeframes(spec: &str) -> Result<Vec<Timeframe>, CryptolensError> {
    let invalid = |reason: String| CryptolensError::ConfigInvalid {
        section: "timeframes".into(),
        key: "specs".into(),
        reason,
    };

    let mut timeframes = Vec::new();
    for entry in spec.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let mut parts = entry.split(':');
        let label = parts
            .next()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| invalid(format!("empty label in '{entry}'")))?;
        let days: u32 = parts
            .next()
            .ok_or_else(|| invalid(format!("missing days in '{entry}'")))?
            .trim()
            .parse()
            .map_err(|_| invalid(format!("invalid days in '{entry}'")))?;
        if days == 0 {
            return Err(invalid(format!("days must be positive in '{entry}'")));
        }
        let interval_str = parts
            .next()
            .ok_or_else(|| invalid(format!("missing interval in '{entry}'")))?
            .trim();
        let interval = SampleInterval::parse(interval_str)
            .ok_or_else(|| invalid(format!("unknown interval '{interval_str}' in '{entry}'")))?;
        if parts.next().is_some() {
            return Err(invalid(format!("too many fields in '{entry}'")));
        }
        if timeframes.iter().any(|t: &Timeframe| t.label == label) {
            return Err(invalid(format!("duplicate label '{label}'")));
        }
        timeframes.push(Timeframe::new(label, days, interval));
    }

    if timeframes.is_empty() {
        return Err(invalid("no timeframes configured".into()));
    }
    Ok(timeframes)
}

/// Default timeframe set; `daily` matches the 30-day daily window the
/// interpretation is anchored to.
pub fn default_timeframes() -> Vec<Timeframe> {
    vec![
        Timeframe::new("4h", 14, SampleInterval::Hourly),
        Timeframe::new("daily", 30, SampleInterval::Daily),
        Timeframe::new("weekly", 180, SampleInterval::Daily),
    ]
}
