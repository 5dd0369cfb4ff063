//! Builds the `measurements` request for a selection.

use crate::types::parameter::Parameter;
use crate::types::selection::{CitySelection, Selection};
use crate::utils::endpoint_url;
use reqwest::Url;

/// The filters of one `measurements` request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MeasurementQuery {
    pub country: String,
    pub city: CitySelection,
    pub parameter: Parameter,
}

impl MeasurementQuery {
    /// Builds `{base}measurements?country_id=..[&city=..]&parameter=..&limit=..&sort=desc`.
    ///
    /// The city pair is left out entirely for [`CitySelection::All`].
    pub fn url(&self, base: &Url, limit: u32) -> Url {
        let mut query = vec![("country_id", self.country.clone())];
        if let Some(city) = self.city.name() {
            query.push(("city", city.to_string()));
        }
        query.push(("parameter", self.parameter.as_str().to_string()));
        query.push(("limit", limit.to_string()));
        query.push(("sort", "desc".to_string()));
        endpoint_url(base, "measurements", &query)
    }
}

impl From<&Selection> for MeasurementQuery {
    fn from(selection: &Selection) -> Self {
        Self {
            country: selection.country.clone(),
            city: selection.city.clone(),
            parameter: selection.parameter,
        }
    }
}
