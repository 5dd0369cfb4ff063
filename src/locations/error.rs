use thiserror::Error;

#[derive(Debug, Error)]
pub enum LocationError {
    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("Failed to read response body from {0}")]
    BodyRead(String, #[source] reqwest::Error),

    #[error("Failed to parse JSON lookup result from {url}")]
    JsonParse {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}
