//! CSV file market-data adapter for offline analysis.
//!
//! Reads `{asset}_{label}.csv` files with `timestamp,close` rows, where
//! timestamp is RFC 3339.

use crate::domain::error::CryptolensError;
use crate::domain::series::{PricePoint, PriceSeries};
use crate::domain::timeframe::Timeframe;
use crate::ports::market_data_port::MarketDataPort;
use chrono::{DateTime, Utc};
use std::fs;
use std::path::PathBuf;

pub struct CsvAdapter {
    base_path: PathBuf,
}

impl CsvAdapter {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    fn csv_path(&self, asset_id: &str, label: &str) -> PathBuf {
        self.base_path.join(format!("{asset_id}_{label}.csv"))
    }
}

impl MarketDataPort for CsvAdapter {
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

        let path = self.csv_path(asset_id, &timeframe.label);
        let content = fs::read_to_string(&path)
            .map_err(|e| fetch_err(format!("failed to read {}: {}", path.display(), e)))?;

        let mut rdr = csv::Reader::from_reader(content.as_bytes());
        let mut points = Vec::new();

        for result in rdr.records() {
            let record = result.map_err(|e| fetch_err(format!("CSV parse error: {e}")))?;

            let timestamp_str = record
                .get(0)
                .ok_or_else(|| fetch_err("missing timestamp column".into()))?;
            let timestamp = DateTime::parse_from_rfc3339(timestamp_str)
                .map_err(|e| fetch_err(format!("invalid timestamp '{timestamp_str}': {e}")))?
                .with_timezone(&Utc);

            let close: f64 = record
                .get(1)
                .ok_or_else(|| fetch_err("missing close column".into()))?
                .parse()
                .map_err(|e| fetch_err(format!("invalid close value: {e}")))?;

            points.push(PricePoint { timestamp, close });
        }

        points.sort_by_key(|p| p.timestamp);
        points.dedup_by_key(|p| p.timestamp);

        PriceSeries::new(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::timeframe::SampleInterval;
    use tempfile::TempDir;

    fn timeframe() -> Timeframe {
        Timeframe::new("daily", 30, SampleInterval::Daily)
    }

    fn setup_test_data() -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().to_path_buf();

        let csv_content = "timestamp,close\n\
            2024-01-15T00:00:00Z,42000.5\n\
            2024-01-16T00:00:00Z,42750.0\n\
            2024-01-17T00:00:00Z,41900.25\n";
        fs::write(path.join("bitcoin_daily.csv"), csv_content).unwrap();

        (dir, path)
    }

    #[test]
    fn fetch_prices_returns_ascending_series() {
        let (_dir, path) = setup_test_data();
        let adapter = CsvAdapter::new(path);

        let series = adapter.fetch_prices("bitcoin", &timeframe()).unwrap();
        assert_eq!(series.len(), 3);
        assert_eq!(series.closes(), vec![42000.5, 42750.0, 41900.25]);
    }

    #[test]
    fn fetch_prices_sorts_unordered_rows() {
        let dir = TempDir::new().unwrap();
        let csv_content = "timestamp,close\n\
            2024-01-17T00:00:00Z,41900.25\n\
            2024-01-15T00:00:00Z,42000.5\n\
            2024-01-16T00:00:00Z,42750.0\n";
        fs::write(dir.path().join("bitcoin_daily.csv"), csv_content).unwrap();

        let adapter = CsvAdapter::new(dir.path().to_path_buf());
        let series = adapter.fetch_prices("bitcoin", &timeframe()).unwrap();
        assert_eq!(series.closes(), vec![42000.5, 42750.0, 41900.25]);
    }

    #[test]
    fn fetch_prices_errors_for_missing_file() {
        let (_dir, path) = setup_test_data();
        let adapter = CsvAdapter::new(path);

        let result = adapter.fetch_prices("solana", &timeframe());
        assert!(matches!(result, Err(CryptolensError::Fetch { .. })));
    }

    #[test]
    fn fetch_prices_errors_for_bad_timestamp() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("bitcoin_daily.csv"),
            "timestamp,close\nyesterday,42000.0\n",
        )
        .unwrap();

        let adapter = CsvAdapter::new(dir.path().to_path_buf());
        assert!(adapter.fetch_prices("bitcoin", &timeframe()).is_err());
    }

    #[test]
    fn fetch_prices_errors_for_bad_close() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("bitcoin_daily.csv"),
            "timestamp,close\n2024-01-15T00:00:00Z,lots\n",
        )
        .unwrap();

        let adapter = CsvAdapter::new(dir.path().to_path_buf());
        assert!(adapter.fetch_prices("bitcoin", &timeframe()).is_err());
    }
}
