//! Provider backed by the public coronavirus-tracker API.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::debug;

use crate::models::report::Report;
use crate::models::request_params::ReportRequestParams;
use crate::providers::DataProvider;
use crate::providers::errors::ProviderError;

const BASE_URL: &str = "https://coronavirus-tracker-api.herokuapp.com";
const LOCATIONS_PATH: &str = "/v2/locations";

/// Fetches reports from the coronavirus-tracker API.
///
/// The HTTP client is supplied by the caller, so timeout and proxy policy
/// stay under the caller's control. No authentication is required.
pub struct TrackerProvider {
    client: Client,
    base_url: String,
}

impl TrackerProvider {
    /// Creates a provider with a default `reqwest` client.
    pub fn new() -> Result<Self, ProviderError> {
        Ok(Self::with_client(Client::builder().build()?))
    }

    /// Creates a provider around a caller-supplied client.
    pub fn with_client(client: Client) -> Self {
        Self {
            client,
            base_url: BASE_URL.to_string(),
        }
    }

    /// Points the provider at a different host. Intended for tests.
    pub fn with_base_url(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn locations_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), LOCATIONS_PATH)
    }
}

fn construct_params(params: &ReportRequestParams) -> Vec<(String, String)> {
    vec![
        ("country_code".to_string(), params.country_code.clone()),
        ("timelines".to_string(), params.timelines.to_string()),
    ]
}

#[async_trait]
impl DataProvider for TrackerProvider {
    async fn fetch_report(&self, params: ReportRequestParams) -> Result<Report, ProviderError> {
        let url = self.locations_url();
        debug!(%url, country_code = %params.country_code, "requesting locations");

        let response = self
            .client
            .get(&url)
            .query(&construct_params(&params))
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown API error".to_string());
            return Err(ProviderError::Status { status, message });
        }

        // Decode from the raw body so a malformed payload is classified as a
        // decode failure rather than a transport failure.
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
