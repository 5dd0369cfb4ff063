//! City rows returned by the OpenAQ `cities` endpoint.

use serde::{Deserialize, Serialize};

/// A city with measurement locations, scoped to one country.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct City {
    /// City name as used by the `city` filter of the `measurements` endpoint.
    pub city: String,
    /// Country code the city belongs to.
    #[serde(alias = "country_id", default)]
    pub country: Option<String>,
    /// Number of measurement locations in the city.
    #[serde(default)]
    pub locations: Option<u64>,
    /// Total number of measurements recorded for the city.
    #[serde(default)]
    pub count: Option<u64>,
}
