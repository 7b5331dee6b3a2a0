use thiserror::Error;

/// Errors raised by parameter validation, apogee extraction and export.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid parameter '{field}': {reason}")]
    InvalidParameters { field: &'static str, reason: String },

    #[error("no apogee detected: velocity never became negative within the {horizon} s horizon")]
    NoApogeeDetected { horizon: f64 },

    #[error("failed to parse configuration")]
    Config(#[from] toml::de::Error),

    #[error("I/O error")]
    Io(#[from] std::io::Error),

    #[error("failed to write CSV")]
    Csv(#[from] csv::Error),

    #[error("failed to write JSON")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidParameters {
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
