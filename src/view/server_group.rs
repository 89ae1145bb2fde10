//! Server group summary projection.

use super::instance::{project_instance, InstanceView};
use crate::model::{Cluster, InstanceCounts, ServerGroup};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// The stable, provider-agnostic summary of one server group.
///
/// Optional capabilities the provider did not expose are omitted from the
/// serialized record entirely; consumers can rely on "key present" meaning
/// "provider said so".
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerGroupSummary {
    pub name: String,
    pub account: String,
    pub region: String,
    pub cluster: String,
    pub cloud_provider: String,
    #[serde(rename = "type")]
    pub group_type: String,
    pub created_time: i64,
    pub disabled: bool,
    pub instances: Vec<InstanceView>,
    pub instance_counts: InstanceCounts,
    pub security_groups: Vec<String>,
    pub load_balancers: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_info: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_metadata: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<BTreeMap<String, String>>,
}

/// Build the summary view of one server group tagged with its owning cluster.
pub fn summarize(group: &ServerGroup, cluster: &Cluster) -> ServerGroupSummary {
    ServerGroupSummary {
        name: group.name.clone(),
        account: cluster.account_name.clone(),
        region: group.region.clone(),
        cluster: cluster.name.clone(),
        cloud_provider: group.cloud_provider.clone(),
        group_type: group.group_type.clone(),
        created_time: group.created_time,
        disabled: group.disabled,
        instances: group.instances.iter().map(project_instance).collect(),
        instance_counts: group.instance_counts.clone(),
        security_groups: group.security_groups.clone(),
        load_balancers: group.load_balancers.clone(),
        // Present only when the provider ships a launch config that names one.
        instance_type: group
            .launch_config
            .as_ref()
            .and_then(|lc| lc.instance_type.clone()),
        vpc_id: group.vpc_id.clone(),
        build_info: group.build_info.clone(),
        provider_metadata: group.provider_metadata.clone(),
        // An empty tag map counts as "nothing to say".
        tags: group.tags.as_ref().filter(|t| !t.is_empty()).cloned(),
    }
}
