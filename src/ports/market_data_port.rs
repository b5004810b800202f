//! Market-data access port trait.

use crate::domain::error::CryptolensError;
use crate::domain::series::PriceSeries;
use crate::domain::timeframe::Timeframe;

pub trait MarketDataPort {
    /// Fetch the closing-price history for one asset over one timeframe's
    /// (lookback window, sampling interval) pair.
    fn fetch_prices(
        &self,
        asset_id: &str,
        timeframe: &Timeframe,
    ) -> Result<PriceSeries, CryptolensError>;
}
