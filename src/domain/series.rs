//! Price series representation.

use crate::domain::error::CryptolensError;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct PricePoint {
    pub timestamp: DateTime<Utc>,
    pub close: f64,
}

/// An ordered closing-price series for one (asset, timeframe) pair.
///
/// Invariant, enforced at construction: timestamps are strictly ascending,
/// so there are no duplicates. Adapters sort and dedup before constructing.
#[derive(Debug, Clone)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    pub fn new(points: Vec<PricePoint>) -> Result<Self, CryptolensError> {
        for pair in points.windows(2) {
            if pair[1].timestamp <= pair[0].timestamp {
                return Err(CryptolensError::InvalidSeries {
                    reason: format!(
                        "timestamps not strictly ascending at {}",
                        pair[1].timestamp
                    ),
                });
            }
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Closing prices in ascending time order.
    pub fn closes(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.close).collect()
    }

    pub fn last_close(&self) -> Option<f64> {
        self.points.last().map(|p| p.close)
    }
}
