#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use cryptolens::domain::error::CryptolensError;
use cryptolens::domain::series::{PricePoint, PriceSeries};
use cryptolens::domain::timeframe::Timeframe;
use cryptolens::ports::market_data_port::MarketDataPort;
use std::collections::HashMap;

pub struct MockMarketDataPort {
    pub series: HashMap<(String, String), Vec<f64>>,
    pub errors: HashMap<(String, String), String>,
}

impl MockMarketDataPort {
    pub fn new() -> Self {
        Self {
            series: HashMap::new(),
            errors: HashMap::new(),
        }
    }

    pub fn with_series(mut self, asset_id: &str, label: &str, closes: Vec<f64>) -> Self {
        self.series
            .insert((asset_id.to_string(), label.to_string()), closes);
        self
    }

    pub fn with_error(mut self, asset_id: &str, label: &str, reason: &str) -> Self {
        self.errors
            .insert((asset_id.to_string(), label.to_string()), reason.to_string());
        self
    }
}

impl MarketDataPort for MockMarketDataPort {
    fn fetch_prices(
        &self,
        asset_id: &str,
        timeframe: &Timeframe,
    ) -> Result<PriceSeries, CryptolensError> {
        let key = (asset_id.to_string(), timeframe.label.clone());
        if let Some(reason) = self.errors.get(&key) {
            return Err(CryptolensError::Fetch {
                asset: asset_id.to_string(),
                timeframe: timeframe.label.clone(),
                reason: reason.clone(),
            });
        }
        make_series(self.series.get(&key).cloned().unwrap_or_default())
    }
}

pub fn make_series(closes: Vec<f64>) -> Result<PriceSeries, CryptolensError> {
    let points = closes
        .iter()
        .enumerate()
        .map(|(i, &close)| PricePoint {
            timestamp: Utc.timestamp_opt(1_700_000_000 + i as i64 * 86_400, 0).unwrap(),
            close,
        })
        .collect();
    PriceSeries::new(points)
}

/// Monotonically rising closes, 100.0 upward in unit steps.
pub fn ramp(len: usize) -> Vec<f64> {
    (0..len).map(|i| 100.0 + i as f64).collect()
}

/// Net uptrend with alternating +1.0/-0.5 steps; RSI stays near 67.
pub fn zigzag_uptrend(len: usize) -> Vec<f64> {
    let mut closes = vec![100.0];
    for i in 0..len - 1 {
        let step = if i % 2 == 0 { 1.0 } else { -0.5 };
        closes.push(closes[i] + step);
    }
    closes
}
