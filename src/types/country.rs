//! Country rows returned by the OpenAQ `countries` endpoint.

use serde::{Deserialize, Serialize};

/// A country known to OpenAQ. Only `code` feeds the country selector, the
/// remaining fields are kept for display.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Country {
    /// ISO 3166-1 alpha-2 code (e.g. "MY", "NL").
    pub code: String,
    /// English name, if the API reports one.
    #[serde(default)]
    pub name: Option<String>,
    /// Number of measurement locations in the country.
    #[serde(default)]
    pub locations: Option<u64>,
    /// Total number of measurements recorded for the country.
    #[serde(default)]
    pub count: Option<u64>,
}
