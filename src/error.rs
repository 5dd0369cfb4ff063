use crate::locations::error::LocationError;
use crate::measurements::error::MeasurementError;
use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OpenAqError {
    #[error(transparent)]
    Location(#[from] LocationError),

    #[error(transparent)]
    Measurement(#[from] MeasurementError),

    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("API key contains characters that are not allowed in a header")]
    InvalidApiKey(#[source] reqwest::header::InvalidHeaderValue),

    #[error("Failed to build HTTP client")]
    HttpClient(#[source] reqwest::Error),

    #[error("Failed processing DataFrame: {0}")]
    PolarsError(#[from] PolarsError),

    #[error("Failed to write '{0}'")]
    Export(PathBuf, #[source] std::io::Error),

    #[error("Failed to draw on the output surface")]
    Surface(#[source] std::io::Error),
}
