//! This module provides the main entry point for talking to the OpenAQ API.
//! It resolves the country and city lists behind the selectors and issues the
//! measurement query for a selection.

use crate::config::OpenAqConfig;
use crate::error::OpenAqError;
use crate::locations::location_resolver::LocationResolver;
use crate::measurements::fetcher::MeasurementFetcher;
use crate::measurements::query::MeasurementQuery;
use crate::measurements::response::RawResponse;
use crate::types::city::City;
use crate::types::country::Country;
use crate::types::parameter::Parameter;
use crate::types::selection::CitySelection;
use crate::utils::parse_base_url;
use bon::bon;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, Url};
use std::time::Duration;

// Header names must be lowercase for `HeaderMap::insert` with a static str.
const API_KEY_HEADER: &str = "x-api-key";

/// The client struct for the OpenAQ v2 API.
///
/// Country and city lookups are memoized per argument for the lifetime of the
/// client; measurement queries always go to the network.
///
/// # Examples
///
/// ```no_run
/// # use openaq_dashboard::{OpenAq, OpenAqError, Parameter};
/// # #[tokio::main]
/// # async fn main() -> Result<(), OpenAqError> {
/// let client = OpenAq::new()?;
/// let response = client
///     .measurements()
///     .country("MY")
///     .parameter(Parameter::Pm25)
///     .call()
///     .await?;
/// println!("HTTP {} from {}", response.status, response.url);
/// # Ok(())
/// # }
/// ```
pub struct OpenAq {
    resolver: LocationResolver,
    fetcher: MeasurementFetcher,
}

#[bon]
impl OpenAq {
    /// Creates a client for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`OpenAqError::InvalidBaseUrl`] if `base_url` is not an http(s) URL,
    /// [`OpenAqError::InvalidApiKey`] if the key cannot be sent as a header and
    /// [`OpenAqError::HttpClient`] if the HTTP client cannot be initialised.
    pub fn with_config(config: OpenAqConfig) -> Result<Self, OpenAqError> {
        let base_url =
            parse_base_url(&config.base_url).map_err(|reason| OpenAqError::InvalidBaseUrl {
                url: config.base_url.clone(),
                reason,
            })?;

        let mut headers = HeaderMap::new();
        if let Some(key) = config.api_key.as_deref() {
            let mut value = HeaderValue::from_str(key).map_err(OpenAqError::InvalidApiKey)?;
            value.set_sensitive(true);
            headers.insert(API_KEY_HEADER, value);
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()
            .map_err(OpenAqError::HttpClient)?;

        Ok(Self {
            resolver: LocationResolver::new(
                client.clone(),
                base_url.clone(),
                config.location_limit,
            ),
            fetcher: MeasurementFetcher::new(client, base_url, config.measurement_limit),
        })
    }

    /// Creates a client for the public API with default settings.
    pub fn new() -> Result<Self, OpenAqError> {
        Self::with_config(OpenAqConfig::default())
    }

    /// Lists the countries known to OpenAQ.
    ///
    /// A non-200 answer yields an empty list rather than an error.
    pub async fn countries(&self) -> Result<Vec<Country>, OpenAqError> {
        Ok(self.resolver.countries().await?)
    }

    /// Lists the cities of `country`.
    ///
    /// A non-200 answer yields an empty list rather than an error.
    pub async fn cities(&self, country: &str) -> Result<Vec<City>, OpenAqError> {
        Ok(self.resolver.cities(country).await?)
    }

    /// Fetches the latest measurements for a country, optionally narrowed to one
    /// city, and returns the raw response so the caller can branch on the status.
    ///
    /// # Arguments
    ///
    /// * `.country(&str)`: **Required.** Country code, e.g. `"MY"`.
    /// * `.city(CitySelection)`: Optional. Defaults to [`CitySelection::All`].
    /// * `.parameter(Parameter)`: Optional. Defaults to [`Parameter::Pm25`].
    ///
    /// # Errors
    ///
    /// Returns [`OpenAqError::Measurement`] only when the request could not be
    /// sent or the body could not be read.
    #[builder]
    pub async fn measurements(
        &self,
        country: &str,
        city: Option<CitySelection>,
        parameter: Option<Parameter>,
    ) -> Result<RawResponse, OpenAqError> {
        let query = MeasurementQuery {
            country: country.to_string(),
            city: city.unwrap_or_default(),
            parameter: parameter.unwrap_or_default(),
        };
        self.fetch(&query).await
    }

    pub(crate) async fn fetch(&self, query: &MeasurementQuery) -> Result<RawResponse, OpenAqError> {
        Ok(self.fetcher.fetch(query).await?)
    }

    /// The URL a measurement query would be sent to.
    pub fn measurement_url(&self, query: &MeasurementQuery) -> Url {
        self.fetcher.url_for(query)
    }
}
