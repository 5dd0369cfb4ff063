use crate::locations::error::LocationError;
use crate::types::city::City;
use crate::types::country::Country;
use crate::types::page::ResultsPage;
use crate::types::selection::{CitySelection, DEFAULT_COUNTRY};
use crate::utils::endpoint_url;
use log::{debug, info, warn};
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::collections::{hash_map::Entry, HashMap};
use tokio::sync::Mutex;

/// Looks up the countries and cities that populate the selectors.
///
/// Successful lookups are memoized for the lifetime of the resolver, keyed by
/// their arguments. A non-200 answer degrades to an empty list and is not
/// memoized, so the next run asks again.
pub struct LocationResolver {
    client: Client,
    base_url: Url,
    limit: u32,
    country_cache: Mutex<Option<Vec<Country>>>,
    city_cache: Mutex<HashMap<String, Vec<City>>>,
}

impl LocationResolver {
    pub fn new(client: Client, base_url: Url, limit: u32) -> Self {
        Self {
            client,
            base_url,
            limit,
            country_cache: Mutex::new(None),
            city_cache: Mutex::new(HashMap::new()),
        }
    }

    pub async fn countries(&self) -> Result<Vec<Country>, LocationError> {
        {
            let cache = self.country_cache.lock().await;
            if let Some(countries) = cache.as_ref() {
                debug!("Country list served from cache");
                return Ok(countries.clone());
            }
        }

        let url = endpoint_url(
            &self.base_url,
            "countries",
            &[("limit", self.limit.to_string())],
        );
        let Some(countries) = self.fetch_results::<Country>(url).await? else {
            return Ok(Vec::new());
        };

        let mut cache = self.country_cache.lock().await;
        Ok(cache.get_or_insert(countries).clone())
    }

    pub async fn cities(&self, country: &str) -> Result<Vec<City>, LocationError> {
        let key = country.to_string();
        {
            let cache = self.city_cache.lock().await;
            if let Some(cities) = cache.get(&key) {
                debug!("City list for {} served from cache", country);
                return Ok(cities.clone());
            }
        }

        let url = endpoint_url(
            &self.base_url,
            "cities",
            &[
                ("country_id", country.to_string()),
                ("limit", self.limit.to_string()),
            ],
        );
        let Some(cities) = self.fetch_results::<City>(url).await? else {
            return Ok(Vec::new());
        };

        let mut cache = self.city_cache.lock().await;
        match cache.entry(key) {
            // Another run filled the slot while we were waiting on the network.
            Entry::Occupied(entry) => Ok(entry.get().clone()),
            Entry::Vacant(entry) => Ok(entry.insert(cities).clone()),
        }
    }

    /// `Ok(None)` means the server answered with something other than 200.
    async fn fetch_results<T: DeserializeOwned>(
        &self,
        url: Url,
    ) -> Result<Option<Vec<T>>, LocationError> {
        info!("Requesting {}", url);
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| LocationError::NetworkRequest(url.to_string(), e))?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!("Lookup {} returned HTTP {}, using an empty list", url, status);
            return Ok(None);
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| LocationError::BodyRead(url.to_string(), e))?;
        let page: ResultsPage<T> =
            serde_json::from_slice(&body).map_err(|e| LocationError::JsonParse {
                url: url.to_string(),
                source: e,
            })?;
        info!("Lookup {} returned {} rows", url, page.results.len());
        Ok(Some(page.results))
    }
}

/// Country codes for the country selector, falling back to the default
/// country when the lookup came back empty.
pub fn country_options(countries: &[Country]) -> Vec<String> {
    if countries.is_empty() {
        return vec![DEFAULT_COUNTRY.to_string()];
    }
    countries.iter().map(|c| c.code.clone()).collect()
}

/// City choices for the city selector: the "All Cities" sentinel first, then
/// each distinct city name in server order.
pub fn city_options(cities: &[City]) -> Vec<CitySelection> {
    let mut options = vec![CitySelection::All];
    for city in cities {
        let option = CitySelection::from(city.city.as_str());
        if !options.contains(&option) {
            options.push(option);
        }
    }
    options
}
