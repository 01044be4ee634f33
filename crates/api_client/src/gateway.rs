use std::time::Duration;

use anyhow::{bail, Context, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::warn;

/// Simulated latency before a fallback value is handed back, so a loading
/// indicator does not flash away instantaneously.
pub const FALLBACK_DELAY: Duration = Duration::from_millis(400);

/// Configuration for talking to the platform backend.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub base_url: String,
}

impl GatewayConfig {
    /// Loads config from env vars:
    /// - `DASHBOARD_API_BASE_URL` (default: `http://localhost:8080/api`)
    pub fn from_env() -> Self {
        let base_url = std::env::var("DASHBOARD_API_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:8080/api".to_string());
        Self { base_url }
    }
}

/// Thin HTTP gateway over the dashboard endpoints. One attempt per call;
/// every failure class (transport error, non-2xx status, bad JSON body)
/// collapses into the same fallback path.
#[derive(Debug, Clone)]
pub struct ApiGateway {
    http: Client,
    base_url: String,
}

impl ApiGateway {
    pub fn new(config: GatewayConfig) -> Result<Self> {
        let http = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;
        let base_url = config.base_url.trim_end_matches('/').to_string();
        Ok(Self { http, base_url })
    }

    /// Tries the real API first; if the request fails in any way, logs a
    /// warning and resolves to the supplied fallback after a short
    /// simulated delay. No retries, no backoff.
    pub async fn fetch_with_fallback<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        fallback: T,
        params: &[(&str, String)],
    ) -> T {
        match self.fetch(endpoint, params).await {
            Ok(value) => value,
            Err(err) => {
                warn!(
                    endpoint,
                    "Backend API connection failed. Using fallback demo data: {err:#}"
                );
                tokio::time::sleep(FALLBACK_DELAY).await;
                fallback
            }
        }
    }

    /// Raw single-attempt GET, surfacing the failure instead of falling
    /// back. Used directly by diagnostics that need to know whether the
    /// backend actually answered.
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, endpoint);
        let response = self
            .http
            .get(&url)
            .query(params)
            .send()
            .await
            .with_context(|| format!("GET {url}"))?;

        if !response.status().is_success() {
            bail!("API request failed with status {}", response.status());
        }

        let value = response
            .json::<T>()
            .await
            .with_context(|| format!("Parsing JSON body from {url}"))?;
        Ok(value)
    }
}
