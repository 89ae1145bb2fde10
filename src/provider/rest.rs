//! REST provider source.
//!
//! Proxies a remote provider service that speaks the shared JSON shapes:
//!
//! - `GET {base}/applications/{application}/clusters` - cluster map
//! - `GET {base}/serverGroups/{account}/{region}/{name}` - single group
//!
//! A 404 from either endpoint means "nothing here" and maps to `None`; any
//! other non-success status is a provider failure and propagates.

use super::ProviderSource;
use crate::model::{Cluster, ServerGroup};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use url::Url;
use urlencoding::encode;

/// Maximum length of an error body to log
const MAX_LOG_BODY_LENGTH: usize = 200;

/// Provider source backed by a remote HTTP service.
#[derive(Debug, Clone)]
pub struct RestProviderSource {
    cloud_provider: String,
    base: String,
    token: Option<String>,
    client: reqwest::Client,
}

impl RestProviderSource {
    /// Create a source for one remote provider endpoint. The base URL is
    /// validated up front so bad configuration fails at startup, not on the
    /// first lookup.
    pub fn new(cloud_provider: &str, base: &str) -> Result<Self> {
        Url::parse(base).with_context(|| format!("Invalid provider endpoint: {}", base))?;

        let client = reqwest::Client::builder()
            .user_agent(concat!("fleetview/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            cloud_provider: cloud_provider.to_string(),
            base: base.trim_end_matches('/').to_string(),
            token: None,
            client,
        })
    }

    /// Attach a bearer token sent with every request.
    pub fn with_token(mut self, token: &str) -> Self {
        self.token = Some(token.to_string());
        self
    }

    /// GET a provider URL, mapping 404 to `None`.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<Option<T>> {
        tracing::debug!("GET {}", url);

        let mut request = self.client.get(url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.context("Failed to send request")?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let body = response
            .text()
            .await
            .context("Failed to read response body")?;

        if !status.is_success() {
            tracing::error!("provider error: {} - {}", status, truncate_for_log(&body));
            return Err(anyhow::anyhow!("provider request failed: {}", status));
        }

        if body.is_empty() {
            return Ok(None);
        }

        serde_json::from_str(&body)
            .map(Some)
            .context("Failed to parse provider response JSON")
    }
}

#[async_trait]
impl ProviderSource for RestProviderSource {
    fn cloud_provider_id(&self) -> &str {
        &self.cloud_provider
    }

    async fn lookup_server_group(
        &self,
        account: &str,
        region: &str,
        name: &str,
    ) -> Result<Option<ServerGroup>> {
        let url = format!(
            "{}/serverGroups/{}/{}/{}",
            self.base,
            encode(account),
            encode(region),
            encode(name)
        );
        self.get_json(&url).await
    }

    async fn list_clusters(
        &self,
        application: &str,
    ) -> Result<Option<BTreeMap<String, Cluster>>> {
        let url = format!("{}/applications/{}/clusters", self.base, encode(application));
        self.get_json(&url).await
    }
}

fn truncate_for_log(body: &str) -> String {
    if body.len() > MAX_LOG_BODY_LENGTH {
        let cut = body
            .char_indices()
            .take_while(|(i, _)| *i < MAX_LOG_BODY_LENGTH)
            .last()
            .map(|(i, c)| i + c.len_utf8())
            .unwrap_or(0);
        format!("{}... [truncated, {} bytes total]", &body[..cut], body.len())
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_invalid_endpoints() {
        assert!(RestProviderSource::new("aws", "not a url").is_err());
        assert!(RestProviderSource::new("aws", "https://clouddata.internal/aws").is_ok());
    }

    #[test]
    fn truncates_long_bodies_for_logging() {
        let body = "x".repeat(500);
        let logged = truncate_for_log(&body);
        assert!(logged.starts_with(&"x".repeat(200)));
        assert!(logged.ends_with("[truncated, 500 bytes total]"));
        assert_eq!(truncate_for_log("short"), "short");
    }
}
