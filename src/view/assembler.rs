//! Top-level view assembly.
//!
//! Combines the aggregator with either the strict summary projector or the
//! denormalizing expanded transform, and resolves exact lookups.

use super::server_group::{summarize, ServerGroupSummary};
use crate::aggregate;
use crate::error::Result;
use crate::model::{Cluster, ServerGroup};
use crate::naming::{self, ParsedName};
use crate::provider::ProviderSource;
use serde::Serialize;
use serde_json::{Map, Value};
use std::sync::Arc;

/// A server group listing in whichever shape the caller requested.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ServerGroupListing {
    Summary(Vec<ServerGroupSummary>),
    Expanded(Vec<Map<String, Value>>),
}

/// List an application's server groups, routed by the `expand` flag.
pub async fn server_groups(
    providers: &[Arc<dyn ProviderSource>],
    application: &str,
    cloud_provider: Option<&str>,
    expand: bool,
) -> Result<ServerGroupListing> {
    if expand {
        expanded_list(providers, application, cloud_provider)
            .await
            .map(ServerGroupListing::Expanded)
    } else {
        summary_list(providers, application, cloud_provider)
            .await
            .map(ServerGroupListing::Summary)
    }
}

/// Stable-contract listing: one summary per server group, in cluster order
/// then in-cluster order as aggregation returned them.
pub async fn summary_list(
    providers: &[Arc<dyn ProviderSource>],
    application: &str,
    cloud_provider: Option<&str>,
) -> Result<Vec<ServerGroupSummary>> {
    let clusters = aggregate::list_by_application(providers, application, cloud_provider).await?;

    Ok(clusters
        .iter()
        .flat_map(|cluster| {
            cluster
                .server_groups
                .iter()
                .map(move |group| summarize(group, cluster))
        })
        .collect())
}

/// Denormalized listing: every provider-specific field the summary view would
/// drop is preserved, plus the owning account and the parsed naming lineage.
pub async fn expanded_list(
    providers: &[Arc<dyn ProviderSource>],
    application: &str,
    cloud_provider: Option<&str>,
) -> Result<Vec<Map<String, Value>>> {
    let clusters = aggregate::list_by_application(providers, application, cloud_provider).await?;

    let mut records = Vec::new();
    for cluster in &clusters {
        let parsed = naming::parse(&cluster.name);
        for group in &cluster.server_groups {
            records.push(expand(group, cluster, &parsed)?);
        }
    }
    Ok(records)
}

/// Resolve one server group by its exact key across all providers.
pub async fn get_server_group(
    providers: &[Arc<dyn ProviderSource>],
    account: &str,
    region: &str,
    name: &str,
) -> Result<ServerGroup> {
    aggregate::lookup_exact(providers, account, region, name).await
}

fn expand(group: &ServerGroup, cluster: &Cluster, parsed: &ParsedName) -> Result<Map<String, Value>> {
    // serde_json is the open-record collaborator: the full group, flattened
    // provider extras included, becomes a generic key/value map.
    let Value::Object(mut record) = serde_json::to_value(group)? else {
        unreachable!("a server group serializes as a JSON object");
    };

    record.insert(
        "accountName".to_string(),
        Value::String(cluster.account_name.clone()),
    );
    record.insert(
        "application".to_string(),
        Value::String(parsed.application.clone()),
    );
    if let Some(stack) = &parsed.stack {
        record.insert("stack".to_string(), Value::String(stack.clone()));
    }
    if let Some(detail) = &parsed.detail {
        record.insert("detail".to_string(), Value::String(detail.clone()));
    }
    record.insert("cluster".to_string(), Value::String(parsed.cluster.clone()));

    Ok(record)
}
