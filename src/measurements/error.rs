use thiserror::Error;

#[derive(Debug, Error)]
pub enum MeasurementError {
    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    // The status line arrived but the body stream broke off.
    #[error("Failed to read response body from {0}")]
    BodyRead(String, #[source] reqwest::Error),

    #[error("Failed to parse measurements from {url}")]
    JsonParse {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}
