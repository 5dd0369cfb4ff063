//! The user's current sidebar choices.

use crate::types::parameter::Parameter;
use std::fmt;
use std::str::FromStr;

/// Label of the sentinel city option that disables the city filter.
pub const ALL_CITIES: &str = "All Cities";

/// Country code used when the country list comes back empty.
pub const DEFAULT_COUNTRY: &str = "MY";

/// The city part of a selection: either one named city or no city filter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CitySelection {
    /// The "All Cities" sentinel.
    #[default]
    All,
    Named(String),
}

impl CitySelection {
    /// The city name to filter on, `None` for the sentinel.
    pub fn name(&self) -> Option<&str> {
        match self {
            CitySelection::All => None,
            CitySelection::Named(name) => Some(name),
        }
    }

    pub fn label(&self) -> &str {
        self.name().unwrap_or(ALL_CITIES)
    }
}

impl fmt::Display for CitySelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Maps the sentinel label (and an empty string) to [`CitySelection::All`],
/// anything else to a named city.
impl From<&str> for CitySelection {
    fn from(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(ALL_CITIES) {
            CitySelection::All
        } else {
            CitySelection::Named(trimmed.to_string())
        }
    }
}

impl FromStr for CitySelection {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(CitySelection::from(s))
    }
}

/// Everything one dashboard run needs to know about the user's input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Selection {
    pub country: String,
    pub city: CitySelection,
    pub parameter: Parameter,
}

impl Selection {
    pub fn new(country: impl Into<String>, city: impl Into<CitySelection>, parameter: Parameter) -> Self {
        Self {
            country: country.into(),
            city: city.into(),
            parameter,
        }
    }

    /// Place name shown in headings: the city when one is picked, else the country.
    pub fn place(&self) -> &str {
        self.city.name().unwrap_or(&self.country)
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::new(DEFAULT_COUNTRY, CitySelection::All, Parameter::default())
    }
}
