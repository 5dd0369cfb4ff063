use crate::measurements::error::MeasurementError;
use crate::types::measurement::Measurement;
use crate::types::page::ResultsPage;
use reqwest::{StatusCode, Url};
use serde_json::Value;

const MAX_TEXT_DIAGNOSTIC_CHARS: usize = 500;

/// An unparsed HTTP answer from the `measurements` endpoint.
///
/// The caller decides what a status means; nothing here fails on non-200.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub url: Url,
    pub status: StatusCode,
    pub body: String,
}

/// What to show next to an upstream error.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// The body parsed as JSON and can be shown as-is.
    Json(Value),
    /// Plain notice used when the body is not JSON.
    Text(String),
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        self.status == StatusCode::OK
    }

    /// Parses the `results` list of the body.
    ///
    /// # Errors
    ///
    /// Returns [`MeasurementError::JsonParse`] when the body is not a results page,
    /// or when a row lacks a usable `value` or `date.utc`.
    pub fn results(&self) -> Result<Vec<Measurement>, MeasurementError> {
        serde_json::from_str::<ResultsPage<Measurement>>(&self.body)
            .map(|page| page.results)
            .map_err(|e| MeasurementError::JsonParse {
                url: self.url.to_string(),
                source: e,
            })
    }

    /// Best-effort dump of the body for an error message.
    pub fn diagnostic(&self) -> Diagnostic {
        if let Ok(value) = serde_json::from_str::<Value>(&self.body) {
            return Diagnostic::Json(value);
        }
        let body = self.body.trim();
        if body.is_empty() {
            return Diagnostic::Text(format!(
                "No response body (HTTP {}).",
                self.status.as_u16()
            ));
        }
        let mut excerpt: String = body.chars().take(MAX_TEXT_DIAGNOSTIC_CHARS).collect();
        if body.chars().count() > MAX_TEXT_DIAGNOSTIC_CHARS {
            excerpt.push_str("...");
        }
        Diagnostic::Text(format!(
            "Response body is not valid JSON (HTTP {}): {}",
            self.status.as_u16(),
            excerpt
        ))
    }
}
