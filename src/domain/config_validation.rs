//! Up-front validation of an analysis configuration, before any fetch.

use crate::domain::asset::parse_assets;
use crate::domain::error::CryptolensError;
use crate::domain::timeframe::parse_timeframes;
use crate::ports::config_port::ConfigPort;

/// Check that every configured value parses. Absent keys are fine: the CLI
/// falls back to built-in defaults for them.
pub fn validate_analysis_config(config: &dyn ConfigPort) -> Result<(), CryptolensError> {
    if let Some(ids) = config.get_string("assets", "ids") {
        parse_assets(&ids)?;
    }

    if let Some(specs) = config.get_string("timeframes", "specs") {
        parse_timeframes(&specs)?;
    }

    if let Some(base_url) = config.get_string("api", "base_url") {
        if base_url.trim().is_empty() {
            return Err(CryptolensError::ConfigInvalid {
                section: "api".into(),
                key: "base_url".into(),
                reason: "must not be empty".into(),
            });
        }
    }

    let timeout = config.get_int("api", "timeout_secs", 10);
    if timeout <= 0 {
        return Err(CryptolensError::ConfigInvalid {
            section: "api".into(),
            key: "timeout_secs".into(),
            reason: "must be positive".into(),
        });
    }

    Ok(())
}
