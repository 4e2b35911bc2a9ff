//! Directions HTTP client.
//!
//! Provides async lookups against the Google Directions JSON API.
//! Handles authentication, concurrency limiting, and conversion to
//! [`ProviderRoute`].

use std::sync::Arc;

use tokio::sync::Semaphore;
use tracing::debug;

use super::convert::convert_response;
use super::error::DirectionsError;
use super::provider::{DirectionsProvider, ProviderRequest, ProviderRoute};
use super::types::DirectionsResponse;

/// Default base URL for the Directions API.
const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/directions";

/// Default maximum concurrent requests.
const DEFAULT_MAX_CONCURRENT: usize = 8;

/// Traffic model requested for driving lookups.
const TRAFFIC_MODEL: &str = "best_guess";

/// Configuration for the directions client.
#[derive(Debug, Clone)]
pub struct DirectionsConfig {
    /// API key, sent as the `key` query parameter
    pub api_key: String,
    /// Base URL for the API (defaults to production Google)
    pub base_url: String,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl DirectionsConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set maximum concurrent requests.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Directions API client.
///
/// Uses a semaphore to limit concurrent requests and avoid rate limiting.
#[derive(Debug, Clone)]
pub struct DirectionsClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    semaphore: Arc<Semaphore>,
}

impl DirectionsClient {
    /// Create a new client with the given configuration.
    pub fn new(config: DirectionsConfig) -> Result<Self, DirectionsError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            api_key: config.api_key,
            semaphore: Arc::new(Semaphore::new(config.max_concurrent.max(1))),
        })
    }

    /// Look up a single route.
    pub async fn fetch_route(
        &self,
        request: &ProviderRequest,
    ) -> Result<ProviderRoute, DirectionsError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| DirectionsError::Api {
                status: 0,
                message: "Semaphore closed".to_string(),
            })?;

        let url = format!("{}/json", self.base_url);
        debug!(
            mode = %request.mode,
            vehicle = ?request.transit_vehicle,
            "requesting directions"
        );

        let response = self
            .http
            .get(&url)
            .query(&query_params(request, &self.api_key))
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(DirectionsError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(DirectionsError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DirectionsError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let parsed: DirectionsResponse =
            serde_json::from_str(&body).map_err(|e| DirectionsError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;

        convert_response(&parsed)
    }
}

impl DirectionsProvider for DirectionsClient {
    async fn route(&self, request: &ProviderRequest) -> Result<ProviderRoute, DirectionsError> {
        self.fetch_route(request).await
    }
}

/// Query string for one lookup.
///
/// Driving requests carry `departure_time` and a traffic model so the
/// provider returns `duration_in_traffic`; transit requests carry the
/// vehicle filter when there is one.
fn query_params(request: &ProviderRequest, api_key: &str) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("origin", request.origin.to_string()),
        ("destination", request.destination.to_string()),
        ("mode", request.mode.as_str().to_string()),
    ];

    if request.mode.is_driving_like() {
        if let Some(departure) = request.departure_time {
            params.push(("departure_time", departure.to_string()));
            params.push(("traffic_model", TRAFFIC_MODEL.to_string()));
        }
    }

    if let Some(vehicle) = request.transit_vehicle {
        params.push(("transit_mode", vehicle.as_str().to_string()));
    }

    params.push(("key", api_key.to_string()));
    params
}
