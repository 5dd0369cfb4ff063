//! Defines the pollutant parameters that can be charted.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A pollutant parameter code understood by the OpenAQ `measurements` endpoint.
///
/// The set is closed: a selector can only ever hand one of these four values to
/// the fetcher, so no further validation is needed downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Parameter {
    /// Fine particulate matter, 2.5 µm and smaller.
    #[default]
    Pm25,
    /// Particulate matter, 10 µm and smaller.
    Pm10,
    /// Nitrogen dioxide.
    No2,
    /// Ozone.
    O3,
}

impl Parameter {
    /// All selectable parameters, in the order a selector lists them.
    pub const ALL: [Parameter; 4] = [
        Parameter::Pm25,
        Parameter::Pm10,
        Parameter::No2,
        Parameter::O3,
    ];

    /// The wire code sent as the `parameter` query value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Parameter::Pm25 => "pm25",
            Parameter::Pm10 => "pm10",
            Parameter::No2 => "no2",
            Parameter::O3 => "o3",
        }
    }

    /// The upper-cased code used in headings and chart titles.
    ///
    /// # Examples
    ///
    /// ```
    /// use openaq_dashboard::Parameter;
    ///
    /// assert_eq!(Parameter::Pm25.label(), "PM25");
    /// assert_eq!(Parameter::O3.label(), "O3");
    /// ```
    pub fn label(&self) -> String {
        self.as_str().to_uppercase()
    }
}

/// Formats a `Parameter` as its wire code.
///
/// # Examples
///
/// ```
/// use openaq_dashboard::Parameter;
///
/// assert_eq!(format!("{}", Parameter::No2), "no2");
/// assert_eq!(Parameter::Pm10.to_string(), "pm10");
/// ```
impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown parameter '{0}', expected one of pm25, pm10, no2, o3")]
pub struct ParseParameterError(pub String);

impl FromStr for Parameter {
    type Err = ParseParameterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_lowercase();
        Parameter::ALL
            .into_iter()
            .find(|p| p.as_str() == code)
            .ok_or_else(|| ParseParameterError(s.to_string()))
    }
}
