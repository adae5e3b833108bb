use anyhow::{bail, Context, Result};
use log::debug;
use reqwest::Client;
use serde::Deserialize;
use starchart_common::{FetchState, Planet};

pub const DEFAULT_API_URL: &str = "https://swapi.dev/api/planets";

/// Resolve the collection endpoint: CLI flag, then environment, then the
/// public default.
pub fn resolve_api_url(cli_arg: Option<String>) -> String {
    cli_arg
        .or_else(|| std::env::var("STARCHART_API_URL").ok())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
}

/// Envelope of the collection endpoint. Deserializing into typed [`Planet`]
/// records drops payload fields the explorer never looks at, such as the
/// nested resident list.
#[derive(Debug, Deserialize)]
struct PlanetsResponse {
    results: Vec<Planet>,
}

pub struct PlanetApiClient {
    client: Client,
    endpoint: String,
}

impl PlanetApiClient {
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// Retrieve the full planet collection.
    pub async fn fetch_planets(&self) -> Result<Vec<Planet>> {
        debug!("fetching planet collection from {}", self.endpoint);
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .with_context(|| format!("Failed to reach {}", self.endpoint))?;

        let status = response.status();
        if !status.is_success() {
            bail!("Collection endpoint returned {}", status);
        }

        let page: PlanetsResponse = response
            .json()
            .await
            .context("Failed to parse collection payload")?;
        debug!("retrieved {} planets", page.results.len());
        Ok(page.results)
    }

    /// Retrieve the collection as the `{records, is_loading, error_message}`
    /// triple the explorer consumes. Retrieval failures land in
    /// `error_message`; they are never retried here.
    pub async fn fetch_state(&self) -> FetchState {
        FetchState::from_result(self.fetch_planets().await)
    }
}
