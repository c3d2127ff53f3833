use super::{StateSource, StatusMapping};
use crate::schema::StateReading;
use crate::translator::TranslateError;
use anyhow::{ensure, Context, Result};
use async_trait::async_trait;
use reqwest::{header::CONTENT_TYPE, Client};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

/// Upstream state source configuration
#[derive(Clone, Debug, Deserialize)]
pub struct UpstreamConfig {
    #[serde(default = "default_url")]
    pub url: String,
    /// Upper bound for the whole request, body included
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    #[serde(default)]
    pub schema: StatusMapping,
}

fn default_url() -> String {
    "https://eingang.metalab.at/status.json".to_string()
}

fn default_timeout_seconds() -> u64 {
    5
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            timeout_seconds: default_timeout_seconds(),
            schema: StatusMapping::default(),
        }
    }
}

/// Fetches the lab state with a GET against a fixed URL.
pub struct HttpStateSource {
    http_client: Client,
    url: String,
    mapping: StatusMapping,
}

impl HttpStateSource {
    pub fn new(config: &UpstreamConfig) -> Result<Self> {
        ensure!(
            config.timeout_seconds > 0,
            "upstream timeout_seconds must be greater than 0"
        );

        let http_client = Client::builder()
            .user_agent(concat!("spaceapi-bridge/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http_client,
            url: config.url.clone(),
            mapping: config.schema,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl StateSource for HttpStateSource {
    async fn fetch(&self) -> Result<StateReading, TranslateError> {
        debug!(url = %self.url, "Fetching lab state");

        let response = self
            .http_client
            .get(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| {
                warn!(url = %self.url, timeout = e.is_timeout(), error = %e, "State api request failed");
                TranslateError::Transport(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %self.url, status = %status, "State api returned error status");
            return Err(TranslateError::Transport(format!(
                "state api returned {}",
                status
            )));
        }

        let body = response.bytes().await.map_err(|e| {
            warn!(url = %self.url, error = %e, "Failed to read state api response body");
            TranslateError::Decode(e.to_string())
        })?;

        self.mapping.map(&body)
    }
}
