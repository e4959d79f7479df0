use std::time::Duration;

use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::error::{Result, UpstreamError};

/// Default base URL of the order service
pub const DEFAULT_ORDER_SERVICE_URL: &str = "http://localhost:5001";

/// Where the gateway finds its upstream services
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Base URL of the order service
    pub order_service_url: String,
    /// Base URL of the product service; placeholders are used when unset
    pub product_service_url: Option<String>,
    /// Base URL of the user service; placeholders are used when unset
    pub user_service_url: Option<String>,
    /// Per-request timeout, falls back to the HTTP client default
    pub request_timeout_secs: Option<u64>,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            order_service_url: DEFAULT_ORDER_SERVICE_URL.to_string(),
            product_service_url: None,
            user_service_url: None,
            request_timeout_secs: None,
        }
    }
}

impl UpstreamConfig {
    /// Checks that every configured base URL is an absolute http(s) URL
    pub fn validate(&self) -> Result<()> {
        check_url(&self.order_service_url)?;
        for url in [&self.product_service_url, &self.user_service_url].into_iter().flatten() {
            check_url(url)?;
        }
        Ok(())
    }

    /// Builds the HTTP client shared by every source
    pub fn build_client(&self) -> Result<reqwest::Client> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = self.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        builder.build().map_err(UpstreamError::Client)
    }
}

fn check_url(url: &str) -> Result<()> {
    let parsed = Url::parse(url)
        .map_err(|e| UpstreamError::InvalidUrl { url: url.to_string(), reason: e.to_string() })?;

    match parsed.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(UpstreamError::InvalidUrl {
            url: url.to_string(),
            reason: format!("unsupported scheme '{}'", scheme),
        }),
    }
}
