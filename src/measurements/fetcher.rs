use crate::measurements::error::MeasurementError;
use crate::measurements::query::MeasurementQuery;
use crate::measurements::response::RawResponse;
use log::{info, warn};
use reqwest::{Client, Url};

/// Issues `measurements` requests and hands back the raw answer.
pub struct MeasurementFetcher {
    client: Client,
    base_url: Url,
    limit: u32,
}

impl MeasurementFetcher {
    pub fn new(client: Client, base_url: Url, limit: u32) -> Self {
        Self {
            client,
            base_url,
            limit,
        }
    }

    pub fn url_for(&self, query: &MeasurementQuery) -> Url {
        query.url(&self.base_url, self.limit)
    }

    /// Sends the request for `query`. Any HTTP status is returned as data; only
    /// transport failures are errors.
    pub async fn fetch(&self, query: &MeasurementQuery) -> Result<RawResponse, MeasurementError> {
        let url = self.url_for(query);
        info!("Requesting measurements from {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| MeasurementError::NetworkRequest(url.to_string(), e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| MeasurementError::BodyRead(url.to_string(), e))?;

        let response = RawResponse { url, status, body };
        if response.is_success() {
            info!("Received {} bytes from {}", response.body.len(), response.url);
        } else {
            warn!("HTTP {} for {}", response.status, response.url);
        }
        Ok(response)
    }
}
