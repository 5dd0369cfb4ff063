//! Defines the measurement rows returned by the OpenAQ `measurements` endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_number_from_string;

/// A single reading of one pollutant at one location.
///
/// Rows arrive in server order, newest first. Fields the dashboard does not use
/// are ignored during deserialization.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Measurement {
    /// Parameter code of the reading (e.g. "pm25").
    pub parameter: String,
    /// Measured value. Numeric strings are coerced to `f64`.
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub value: f64,
    /// When the reading was taken.
    pub date: MeasurementDate,
    /// Where the reading was taken, if the location reports coordinates.
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
    /// Name of the measurement location.
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    /// Unit of `value` (e.g. "µg/m³").
    #[serde(default)]
    pub unit: Option<String>,
}

/// The nested `date` object of a measurement.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MeasurementDate {
    /// Timestamp in UTC. Any RFC 3339 offset is normalised to UTC.
    pub utc: DateTime<Utc>,
    /// Local timestamp string as reported by the source, kept verbatim.
    #[serde(default)]
    pub local: Option<String>,
}

/// The nested `coordinates` object of a measurement.
///
/// Either half may be missing; a map point needs both.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Coordinates {
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl Coordinates {
    /// Returns `(latitude, longitude)` when both are present.
    pub fn lat_lon(&self) -> Option<(f64, f64)> {
        Some((self.latitude?, self.longitude?))
    }
}

impl Measurement {
    /// Convenience accessor for the point this reading can be mapped to.
    pub fn lat_lon(&self) -> Option<(f64, f64)> {
        self.coordinates.as_ref().and_then(Coordinates::lat_lon)
    }
}
