//! NtsClient - handles communication with the NTS v2 API.

use std::time::Duration;

use serde::de::DeserializeOwned;

use super::model::{LiveResponse, Mixtape, MixtapesResponse};

/// Default base URL for the NTS API.
pub const NTS_API_BASE_URL: &str = "https://www.nts.live/api/v2";

/// Environment variable that overrides the API base URL.
pub const NTS_API_URL_ENV: &str = "NTS_API_URL";

/// Default timeout for HTTP requests (30 seconds).
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default connection timeout (10 seconds).
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the NTS public API.
pub struct NtsClient {
    base_url: String,
    http_client: reqwest::Client,
}

impl NtsClient {
    /// Create a client for the public NTS API.
    pub fn new() -> Result<Self, ApiError> {
        Self::with_base_url(NTS_API_BASE_URL.to_string())
    }

    /// Create a client against a custom base URL.
    ///
    /// Useful for testing against a mock server.
    pub fn with_base_url(base_url: String) -> Result<Self, ApiError> {
        Self::with_options(base_url, DEFAULT_TIMEOUT)
    }

    /// Create a client with a custom base URL and request timeout.
    pub fn with_options(base_url: String, timeout: Duration) -> Result<Self, ApiError> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(DEFAULT_CONNECT_TIMEOUT)
            .user_agent(concat!("nts-cli/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ApiError::from_transport)?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http_client,
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch what is on air now and next on both channels.
    pub async fn live(&self) -> Result<LiveResponse, ApiError> {
        let value = self.live_raw().await?;
        decode(value)
    }

    /// Fetch the live endpoint without interpreting it.
    pub async fn live_raw(&self) -> Result<serde_json::Value, ApiError> {
        self.get_json("live").await
    }

    /// Fetch the list of Infinite Mixtapes.
    pub async fn mixtapes(&self) -> Result<Vec<Mixtape>, ApiError> {
        let value = self.get_json("mixtapes").await?;
        let response: MixtapesResponse = decode(value)?;
        Ok(response.results)
    }

    /// Download an arbitrary resource, such as show artwork.
    pub async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, ApiError> {
        log::debug!("Downloading {}", url);
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(ApiError::from_transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await.map_err(ApiError::from_transport)?;
        log::debug!("Downloaded {} bytes from {}", bytes.len(), url);
        Ok(bytes.to_vec())
    }

    async fn get_json(&self, endpoint: &str) -> Result<serde_json::Value, ApiError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        log::info!("GET {}", url);

        let response = self
            .http_client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(ApiError::from_transport)?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("NTS API returned {} for {}", status, url);
            return Err(ApiError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(ApiError::from_transport)?;
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

fn decode<T: DeserializeOwned>(value: serde_json::Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Errors that can occur while talking to NTS.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Unable to connect to NTS. Please check your internet connection and try again.")]
    Connection(#[source] reqwest::Error),

    #[error("Error connecting to NTS: {0}")]
    Request(#[source] reqwest::Error),

    #[error("NTS API returned HTTP {status}")]
    Status { status: u16 },

    #[error("Unexpected response from NTS: {0}")]
    Decode(String),
}

impl ApiError {
    /// Classify a transport error into the message users see.
    fn from_transport(error: reqwest::Error) -> Self {
        if error.is_connect() {
            ApiError::Connection(error)
        } else {
            ApiError::Request(error)
        }
    }
}
