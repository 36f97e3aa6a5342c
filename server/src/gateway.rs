//! Gateway admin API client. Reads which services are registered.
//!
//! DESIGN
//! ======
//! The portal only needs service names. `GET {admin}/services` returns a page
//! of `{ "data": [{ "name": … }], "next": … }`; pages are followed until
//! `next` is null or the page cap is hit. A 404 means the gateway has no
//! services endpoint configured yet and is treated as an empty inventory.

use std::time::Duration;

use serde::Deserialize;

use crate::config::GatewayConfig;

/// Upper bound on followed `next` links.
const MAX_PAGES: usize = 50;

/// Errors produced while reading the gateway inventory.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The HTTP request to the gateway failed.
    #[error("gateway request failed: {0}")]
    Request(String),

    /// The gateway returned a non-success HTTP status.
    #[error("gateway response error: status {status}")]
    Status { status: u16 },

    /// The gateway response body could not be deserialized.
    #[error("gateway response parse failed: {0}")]
    Parse(String),
}

/// Source of the availability set.
#[async_trait::async_trait]
pub trait ServiceInventory: Send + Sync {
    /// Names of every service currently registered.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] if the inventory cannot be read.
    async fn service_names(&self) -> Result<Vec<String>, GatewayError>;
}

#[derive(Debug, Deserialize)]
struct ServicePage {
    #[serde(default)]
    data: Vec<ServiceEntry>,
    #[serde(default)]
    next: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ServiceEntry {
    #[serde(default)]
    name: Option<String>,
}

/// Parsed page: names plus the next page reference, if any.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct PageNames {
    pub(crate) names: Vec<String>,
    pub(crate) next: Option<String>,
}

pub(crate) fn parse_services_page(text: &str) -> Result<PageNames, GatewayError> {
    let page: ServicePage = serde_json::from_str(text).map_err(|e| GatewayError::Parse(e.to_string()))?;
    let names = page
        .data
        .into_iter()
        .filter_map(|entry| entry.name)
        .filter(|name| !name.is_empty())
        .collect();
    let next = page.next.filter(|n| !n.is_empty());
    Ok(PageNames { names, next })
}

/// Resolve a `next` reference against the admin base URL.
///
/// The gateway returns either absolute URLs or paths rooted at the admin API.
pub(crate) fn resolve_next(admin_url: &str, next: &str) -> String {
    if next.starts_with("http://") || next.starts_with("https://") {
        next.to_string()
    } else if next.starts_with('/') {
        format!("{admin_url}{next}")
    } else {
        format!("{admin_url}/{next}")
    }
}

pub struct GatewayClient {
    http: reqwest::Client,
    admin_url: String,
}

impl GatewayClient {
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(config: &GatewayConfig) -> Result<Self, GatewayError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GatewayError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, admin_url: config.admin_url.trim_end_matches('/').to_string() })
    }

    #[must_use]
    pub fn admin_url(&self) -> &str {
        &self.admin_url
    }

    /// Fetch one page. `Ok(None)` means the endpoint does not exist.
    async fn fetch_page(&self, url: &str) -> Result<Option<PageNames>, GatewayError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| GatewayError::Request(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(GatewayError::Status { status: status.as_u16() });
        }

        let text = response
            .text()
            .await
            .map_err(|e| GatewayError::Request(e.to_string()))?;
        parse_services_page(&text).map(Some)
    }
}

#[async_trait::async_trait]
impl ServiceInventory for GatewayClient {
    async fn service_names(&self) -> Result<Vec<String>, GatewayError> {
        let mut names = Vec::new();
        let mut url = format!("{}/services", self.admin_url);

        for _ in 0..MAX_PAGES {
            let Some(page) = self.fetch_page(&url).await? else {
                return Ok(names);
            };
            names.extend(page.names);
            match page.next {
                Some(next) => url = resolve_next(&self.admin_url, &next),
                None => return Ok(names),
            }
        }

        tracing::warn!(max_pages = MAX_PAGES, "gateway inventory truncated at page cap");
        Ok(names)
    }
}

#[cfg(test)]
#[path = "gateway_test.rs"]
mod tests;
