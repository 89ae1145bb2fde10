//! File-backed provider source.
//!
//! Serves server-group state from a JSON document, either loaded from disk or
//! handed over pre-parsed. Used by the CLI for offline dumps and by tests as
//! the canonical in-process provider.

use super::ProviderSource;
use crate::model::{Cluster, ServerGroup};
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// On-disk provider document: one cloud provider's clusters, grouped by
/// application, keyed by cluster name.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderDocument {
    pub cloud_provider: String,
    #[serde(default)]
    pub clusters: BTreeMap<String, BTreeMap<String, Cluster>>,
}

/// Provider source backed by a [`ProviderDocument`].
#[derive(Debug, Clone)]
pub struct FileProviderSource {
    document: ProviderDocument,
}

impl FileProviderSource {
    pub fn from_document(document: ProviderDocument) -> Self {
        Self { document }
    }

    /// Load a provider document from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read provider document {}", path.display()))?;
        Self::from_json(&content)
            .with_context(|| format!("Failed to parse provider document {}", path.display()))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let document = serde_json::from_str(json).context("Malformed provider document")?;
        Ok(Self::from_document(document))
    }
}

#[async_trait]
impl ProviderSource for FileProviderSource {
    fn cloud_provider_id(&self) -> &str {
        &self.document.cloud_provider
    }

    async fn lookup_server_group(
        &self,
        account: &str,
        region: &str,
        name: &str,
    ) -> Result<Option<ServerGroup>> {
        for clusters in self.document.clusters.values() {
            for cluster in clusters.values() {
                if cluster.account_name != account {
                    continue;
                }
                for group in &cluster.server_groups {
                    if group.name == name && group.region == region {
                        return Ok(Some(group.clone()));
                    }
                }
            }
        }
        Ok(None)
    }

    async fn list_clusters(
        &self,
        application: &str,
    ) -> Result<Option<BTreeMap<String, Cluster>>> {
        Ok(self.document.clusters.get(application).cloned())
    }
}
