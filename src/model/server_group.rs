//! Server groups and the clusters that own them.

use super::Instance;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// A logical grouping of server groups sharing a naming lineage, owned by one
/// account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cluster {
    pub name: String,
    pub account_name: String,
    /// May be absent or `null` in provider payloads; treated as empty.
    #[serde(default, deserialize_with = "super::null_to_empty")]
    pub server_groups: Vec<ServerGroup>,
}

/// A provider-defined server group snapshot.
///
/// The named fields are the cross-provider contract. Everything else a
/// provider attaches survives in `extra` (flattened on the wire) so the
/// expanded view can reproduce the payload verbatim. Optional capabilities
/// are `Option`s: a provider that does not expose one simply leaves it out.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerGroup {
    pub name: String,
    pub region: String,
    pub cloud_provider: String,
    #[serde(rename = "type")]
    pub group_type: String,
    #[serde(deserialize_with = "super::timestamp_millis")]
    pub created_time: i64,
    #[serde(default)]
    pub disabled: bool,
    /// Null entries from sloppy providers are dropped at ingest.
    #[serde(default, deserialize_with = "super::sparse_list")]
    pub instances: Vec<Instance>,
    #[serde(default)]
    pub instance_counts: InstanceCounts,
    #[serde(default, deserialize_with = "super::null_to_empty")]
    pub security_groups: Vec<String>,
    #[serde(default, deserialize_with = "super::null_to_empty")]
    pub load_balancers: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build_info: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vpc_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_metadata: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub launch_config: Option<LaunchConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<BTreeMap<String, String>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Equality covers the required attribute subset only. Optional capabilities
/// and provider-specific extras are excluded on purpose: two providers
/// reporting the same group may decorate it differently, and cross-provider
/// dedup must still collapse them to one.
impl PartialEq for ServerGroup {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.region == other.region
            && self.cloud_provider == other.cloud_provider
            && self.group_type == other.group_type
            && self.created_time == other.created_time
            && self.disabled == other.disabled
            && self.instances == other.instances
            && self.instance_counts == other.instance_counts
            && self.security_groups == other.security_groups
            && self.load_balancers == other.load_balancers
    }
}

/// Instance counts rolled up by health state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InstanceCounts {
    pub total: i64,
    pub up: i64,
    pub down: i64,
    pub unknown: i64,
    pub out_of_service: i64,
    pub starting: i64,
}

/// Launch configuration, where the provider exposes one. Only the instance
/// type participates in the summary view; the rest rides along for expanded
/// mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn minimal_group(name: &str) -> Value {
        json!({
            "name": name,
            "region": "us-east-1",
            "cloudProvider": "aws",
            "type": "aws",
            "createdTime": 1_700_000_000_000_i64,
            "disabled": false
        })
    }

    #[test]
    fn equality_ignores_optional_capabilities() {
        let mut bare = minimal_group("myapp-main-v001");
        let decorated = {
            let map = bare.as_object().unwrap().clone();
            let mut value = Value::Object(map);
            value["vpcId"] = json!("vpc-123");
            value["buildInfo"] = json!({"jenkins": {"number": "42"}});
            value["zones"] = json!(["us-east-1a"]);
            value
        };

        let a: ServerGroup = serde_json::from_value(bare.take()).unwrap();
        let b: ServerGroup = serde_json::from_value(decorated).unwrap();
        assert_eq!(a, b);
        assert_eq!(b.vpc_id.as_deref(), Some("vpc-123"));
    }

    #[test]
    fn required_attribute_differences_break_equality() {
        let a: ServerGroup = serde_json::from_value(minimal_group("myapp-main-v001")).unwrap();
        let mut other = minimal_group("myapp-main-v001");
        other["disabled"] = json!(true);
        let b: ServerGroup = serde_json::from_value(other).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn provider_specific_fields_survive_in_extra() {
        let mut raw = minimal_group("myapp-main-v001");
        raw["zones"] = json!(["us-east-1a", "us-east-1b"]);
        let group: ServerGroup = serde_json::from_value(raw).unwrap();
        assert_eq!(group.extra["zones"], json!(["us-east-1a", "us-east-1b"]));

        let wire = serde_json::to_value(&group).unwrap();
        assert_eq!(wire["zones"], json!(["us-east-1a", "us-east-1b"]));
        assert!(wire.get("vpcId").is_none());
    }

    #[test]
    fn null_server_groups_deserialize_to_empty() {
        let cluster: Cluster = serde_json::from_value(json!({
            "name": "myapp-main",
            "accountName": "prod",
            "serverGroups": null
        }))
        .unwrap();
        assert!(cluster.server_groups.is_empty());
    }

    #[test]
    fn null_instance_entries_are_dropped() {
        let mut raw = minimal_group("myapp-main-v001");
        raw["instances"] = json!([
            null,
            {
                "name": "i-1",
                "healthState": "Up",
                "launchTime": 1_700_000_100_000_i64,
                "zone": "us-east-1a"
            }
        ]);
        let group: ServerGroup = serde_json::from_value(raw).unwrap();
        assert_eq!(group.instances.len(), 1);
        assert_eq!(group.instances[0].name, "i-1");
    }
}
