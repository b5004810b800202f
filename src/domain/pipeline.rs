//! Request pipeline: fetch each timeframe's series, analyze, interpret.
//!
//! Failure policy: any fetch failure aborts the whole request and discards
//! partial results. Insufficient history is local to one timeframe; its
//! siblings still render.

use crate::domain::analysis::{self, TimeframeResult};
use crate::domain::asset::Asset;
use crate::domain::error::CryptolensError;
use crate::domain::interpretation;
use crate::domain::timeframe::{SampleInterval, Timeframe};
use crate::ports::market_data_port::MarketDataPort;

#[derive(Debug, Clone)]
pub enum TimeframeStatus {
    Analyzed(TimeframeResult),
    InsufficientHistory { points: usize, minimum: usize },
}

#[derive(Debug, Clone)]
pub struct TimeframeOutcome {
    pub timeframe: Timeframe,
    pub status: TimeframeStatus,
}

impl TimeframeOutcome {
    pub fn result(&self) -> Option<&TimeframeResult> {
        match &self.status {
            TimeframeStatus::Analyzed(result) => Some(result),
            TimeframeStatus::InsufficientHistory { .. } => None,
        }
    }
}

/// One request's derived state for a single asset.
#[derive(Debug, Clone)]
pub struct AssetAnalysis {
    pub asset: Asset,
    pub outcomes: Vec<TimeframeOutcome>,
    /// Resolved from the daily timeframe; absent when that timeframe is
    /// missing or unavailable.
    pub interpretation: Option<&'static str>,
}

/// Run the full pipeline for one (asset, timeframe-set) request.
pub fn analyze_asset(
    port: &dyn MarketDataPort,
    asset: &Asset,
    timeframes: &[Timeframe],
) -> Result<AssetAnalysis, CryptolensError> {
    let mut outcomes = Vec::with_capacity(timeframes.len());

    for timeframe in timeframes {
        let series = port.fetch_prices(&asset.id, timeframe)?;
        let status = match analysis::analyze(&series, &timeframe.label) {
            Ok(result) => TimeframeStatus::Analyzed(result),
            Err(CryptolensError::InsufficientHistory {
                points, minimum, ..
            }) => TimeframeStatus::InsufficientHistory { points, minimum },
            Err(e) => return Err(e),
        };
        outcomes.push(TimeframeOutcome {
            timeframe: timeframe.clone(),
            status,
        });
    }

    let interpretation = daily_outcome(&outcomes)
        .and_then(TimeframeOutcome::result)
        .map(interpretation::resolve);

    Ok(AssetAnalysis {
        asset: asset.clone(),
        outcomes,
        interpretation,
    })
}

/// The outcome that drives the interpretation: the timeframe labelled
/// `daily`, or failing that the first one sampled daily.
fn daily_outcome(outcomes: &[TimeframeOutcome]) -> Option<&TimeframeOutcome> {
    outcomes
        .iter()
        .find(|o| o.timeframe.is_daily_label())
        .or_else(|| {
            outcomes
                .iter()
                .find(|o| o.timeframe.interval == SampleInterval::Daily)
        })
}
