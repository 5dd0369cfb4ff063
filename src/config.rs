//! Client configuration.

use serde::{Deserialize, Serialize};

/// Public OpenAQ v2 endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.openaq.org/v2/";

/// Settings for [`crate::OpenAq`].
///
/// `Default` targets the public API with the page sizes the dashboard uses.
/// Every field has a serde default, so a partial TOML/JSON document is enough
/// to override a single value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenAqConfig {
    /// API root, e.g. `https://api.openaq.org/v2/`. A missing trailing slash is added.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Sent as the `X-API-Key` header when set.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Page size for the `countries` and `cities` lookups.
    #[serde(default = "default_location_limit")]
    pub location_limit: u32,

    /// Page size for the `measurements` query.
    #[serde(default = "default_measurement_limit")]
    pub measurement_limit: u32,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

const fn default_timeout() -> u64 {
    30
}

const fn default_location_limit() -> u32 {
    200
}

const fn default_measurement_limit() -> u32 {
    100
}

impl Default for OpenAqConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            timeout_secs: default_timeout(),
            location_limit: default_location_limit(),
            measurement_limit: default_measurement_limit(),
        }
    }
}
