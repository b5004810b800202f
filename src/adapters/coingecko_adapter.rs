//! CoinGecko market-data adapter.
//!
//! Fetches `/coins/{id}/market_chart` and reduces the `prices` array to a
//! validated [`PriceSeries`]. One request per (asset, timeframe) pair.

use crate::domain::error::CryptolensError;
use crate::domain::series::{PricePoint, PriceSeries};
use crate::domain::timeframe::{SampleInterval, Timeframe};
use crate::ports::config_port::ConfigPort;
use crate::ports::market_data_port::MarketDataPort;
use chrono::{TimeZone, Utc};
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.coingecko.com/api/v3";
pub const DEFAULT_USER_AGENT: &str = concat!("cryptolens/", env!("CARGO_PKG_VERSION"));
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Deserialize)]
struct MarketChart {
    prices: Vec<[f64; 2]>,
}

pub struct CoinGeckoAdapter {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl CoinGeckoAdapter {
    pub fn new(
        base_url: &str,
        user_agent: &str,
        timeout: Duration,
    ) -> Result<Self, CryptolensError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(|e| CryptolensError::Io(std::io::Error::other(e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &dyn ConfigPort) -> Result<Self, CryptolensError> {
        let base_url = config
            .get_string("api", "base_url")
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let user_agent = config
            .get_string("api", "user_agent")
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());
        let timeout_secs = config.get_int("api", "timeout_secs", DEFAULT_TIMEOUT_SECS as i64);

        Self::new(
            &base_url,
            &user_agent,
            Duration::from_secs(timeout_secs.max(1) as u64),
        )
    }

    fn chart_url(&self, asset_id: &str, timeframe: &Timeframe) -> String {
        let mut url = format!(
            "{}/coins/{}/market_chart?vs_currency=usd&days={}",
            self.base_url, asset_id, timeframe.days
        );
        // Hourly granularity is CoinGecko's default for short windows; only
        // daily is requested explicitly.
        if timeframe.interval == SampleInterval::Daily {
            url.push_str("&interval=daily");
        }
        url
    }
}

/// Parse a market_chart response body into an ascending price series.
fn parse_chart(body: &str) -> Result<PriceSeries, CryptolensError> {
    let chart: MarketChart =
        serde_json::from_str(body).map_err(|e| CryptolensError::InvalidSeries {
            reason: format!("malformed market_chart response: {e}"),
        })?;

    let mut points = Vec::with_capacity(chart.prices.len());
    for [ms, close] in chart.prices {
        let timestamp = Utc
            .timestamp_millis_opt(ms as i64)
            .single()
            .ok_or_else(|| CryptolensError::InvalidSeries {
                reason: format!("unrepresentable timestamp {ms}"),
            })?;
        points.push(PricePoint { timestamp, close });
    }

    points.sort_by_key(|p| p.timestamp);
    points.dedup_by_key(|p| p.timestamp);

    PriceSeries::new(points)
}

impl MarketDataPort for CoinGeckoAdapter {
    fn fetch_prices(
        &self,
        asset_id: &str,
        timeframe: &Timeframe,
    ) -> Result<PriceSeries, CryptolensError> {
        let fetch_err = |reason: String| CryptolensError::Fetch {
            asset: asset_id.to_string(),
            timeframe: timeframe.label.clone(),
            reason,
        };

        let url = self.chart_url(asset_id, timeframe);
        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| fetch_err(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(fetch_err(format!("HTTP {status}")));
        }

        let body = response.text().map_err(|e| fetch_err(e.to_string()))?;
        parse_chart(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adapter() -> CoinGeckoAdapter {
        CoinGeckoAdapter::new(
            "https://api.coingecko.com/api/v3/",
            DEFAULT_USER_AGENT,
            Duration::from_secs(5),
        )
        .unwrap()
    }

    #[test]
    fn chart_url_daily_interval() {
        let tf = Timeframe::new("daily", 30, SampleInterval::Daily);
        assert_eq!(
            adapter().chart_url("bitcoin", &tf),
            "https://api.coingecko.com/api/v3/coins/bitcoin/market_chart?vs_currency=usd&days=30&interval=daily"
        );
    }

    #[test]
    fn chart_url_hourly_omits_interval() {
        let tf = Timeframe::new("4h", 14, SampleInterval::Hourly);
        assert_eq!(
            adapter().chart_url("ethereum", &tf),
            "https://api.coingecko.com/api/v3/coins/ethereum/market_chart?vs_currency=usd&days=14"
        );
    }

    #[test]
    fn parse_chart_extracts_ascending_closes() {
        let body = r#"{"prices":[[1700000000000,100.5],[1700086400000,101.25],[1700172800000,99.0]],"market_caps":[],"total_volumes":[]}"#;
        let series = parse_chart(body).unwrap();
        assert_eq!(series.closes(), vec![100.5, 101.25, 99.0]);
    }

    #[test]
    fn parse_chart_sorts_and_dedups_timestamps() {
        let body =
            r#"{"prices":[[1700086400000,101.0],[1700000000000,100.0],[1700086400000,102.0]]}"#;
        let series = parse_chart(body).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.closes(), vec![100.0, 101.0]);
    }

    #[test]
    fn parse_chart_rejects_malformed_body() {
        assert!(matches!(
            parse_chart("{\"error\":\"rate limited\"}"),
            Err(CryptolensError::InvalidSeries { .. })
        ));
        assert!(parse_chart("not json").is_err());
    }

    #[test]
    fn parse_chart_accepts_empty_prices() {
        let series = parse_chart(r#"{"prices":[]}"#).unwrap();
        assert!(series.is_empty());
    }
}
