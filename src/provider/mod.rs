//! Provider source contract and backends.
//!
//! Every cloud backend participates through one trait, [`ProviderSource`]:
//! an exact server-group lookup plus a per-application cluster listing. The
//! aggregator treats all sources uniformly; heterogeneous clouds need no
//! shared base type, only this contract.
//!
//! # Backends
//!
//! - [`FileProviderSource`] - serves a JSON document (fixtures, offline dumps)
//! - [`RestProviderSource`] - proxies a remote provider service over HTTP

mod file;
mod rest;

pub use file::{FileProviderSource, ProviderDocument};
pub use rest::RestProviderSource;

use crate::model::{Cluster, ServerGroup};
use async_trait::async_trait;
use std::collections::BTreeMap;

/// A capability exposed by one cloud-provider backend.
///
/// Both operations are read-only. `Ok(None)` means "this provider has no such
/// resource" and is normal control flow; `Err` means the provider call itself
/// failed and propagates to the caller unmodified.
#[async_trait]
pub trait ProviderSource: Send + Sync {
    /// Identity used for cloud-provider filtering (matched case-insensitively).
    fn cloud_provider_id(&self) -> &str;

    /// Look up one server group by its exact `(account, region, name)` key.
    async fn lookup_server_group(
        &self,
        account: &str,
        region: &str,
        name: &str,
    ) -> anyhow::Result<Option<ServerGroup>>;

    /// List the clusters this provider knows for an application, keyed by
    /// cluster name.
    async fn list_clusters(
        &self,
        application: &str,
    ) -> anyhow::Result<Option<BTreeMap<String, Cluster>>>;
}
