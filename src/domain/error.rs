//! Domain error types.

/// Top-level error type for cryptolens.
#[derive(Debug, thiserror::Error)]
pub enum CryptolensError {
    #[error("fetch failed for {asset} ({timeframe}): {reason}")]
    Fetch {
        asset: String,
        timeframe: String,
        reason: String,
    },

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("invalid price series: {reason}")]
    InvalidSeries { reason: String },

    #[error("insufficient history for {timeframe}: have {points} points, need {minimum}")]
    InsufficientHistory {
        timeframe: String,
        points: usize,
        minimum: usize,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&CryptolensError> for std::process::ExitCode {
    fn from(err: &CryptolensError) -> Self {
        let code: u8 = match err {
            CryptolensError::Io(_) => 1,
            CryptolensError::ConfigParse { .. }
            | CryptolensError::ConfigMissing { .. }
            | CryptolensError::ConfigInvalid { .. } => 2,
            CryptolensError::Fetch { .. } => 3,
            CryptolensError::InvalidSeries { .. } => 4,
            CryptolensError::InsufficientHistory { .. } => 5,
        };
        std::process::ExitCode::from(code)
    }
}
