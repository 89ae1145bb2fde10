//! Instance and health projection.

use crate::model::{HealthRecord, Instance, LOAD_BALANCER_HEALTH_KIND};
use serde::Serialize;

/// Normalized instance view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceView {
    pub name: String,
    pub health_state: String,
    pub launch_time: i64,
    pub zone: String,
    pub health: Vec<HealthView>,
}

/// One projected health entry. Fields absent at the source are absent here,
/// never null placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthView {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_balancers: Option<Vec<LoadBalancerHealthView>>,
}

/// A projected load-balancer attachment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadBalancerHealthView {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_balancer_type: Option<String>,
}

/// Build the normalized view of one provider instance.
pub fn project_instance(instance: &Instance) -> InstanceView {
    InstanceView {
        name: instance.name.clone(),
        health_state: instance.health_state.to_string(),
        launch_time: instance.launch_time,
        zone: instance.zone.clone(),
        health: instance.health.iter().map(project_health).collect(),
    }
}

/// Load-balancer attachments are surfaced only for the reserved health kind;
/// other kinds carrying a `loadBalancers` field get it dropped.
fn project_health(record: &HealthRecord) -> HealthView {
    let load_balancers = if record.kind == LOAD_BALANCER_HEALTH_KIND {
        record.load_balancers.as_ref().map(|attachments| {
            attachments
                .iter()
                .map(|lb| LoadBalancerHealthView {
                    name: lb.load_balancer_name.clone(),
                    state: lb.state.clone(),
                    description: lb.description.clone(),
                    health_state: lb.health_state.clone(),
                    load_balancer_type: lb.load_balancer_type.clone(),
                })
                .collect()
        })
    } else {
        None
    };

    HealthView {
        kind: record.kind.clone(),
        state: record.state.clone(),
        status: record.status.clone(),
        load_balancers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn instance(health: serde_json::Value) -> Instance {
        serde_json::from_value(json!({
            "name": "i-1",
            "healthState": "Up",
            "launchTime": 1_700_000_100_000_i64,
            "zone": "us-east-1a",
            "health": health
        }))
        .unwrap()
    }

    #[test]
    fn plain_health_record_keeps_only_present_fields() {
        let view = project_instance(&instance(json!([
            {"type": "Amazon", "state": "Unknown"}
        ])));
        let wire = serde_json::to_value(&view.health).unwrap();
        assert_eq!(wire, json!([{"type": "Amazon", "state": "Unknown"}]));
    }

    #[test]
    fn load_balancer_health_projects_attachments() {
        let view = project_instance(&instance(json!([{
            "type": "LoadBalancer",
            "state": "Up",
            "loadBalancers": [{
                "loadBalancerName": "lb1",
                "state": "InService",
                "healthState": "Up"
            }]
        }])));
        let wire = serde_json::to_value(&view.health).unwrap();
        assert_eq!(
            wire,
            json!([{
                "type": "LoadBalancer",
                "state": "Up",
                "loadBalancers": [{
                    "name": "lb1",
                    "state": "InService",
                    "healthState": "Up"
                }]
            }])
        );
    }

    #[test]
    fn attachments_on_other_kinds_are_dropped() {
        let view = project_instance(&instance(json!([{
            "type": "Discovery",
            "status": "UP",
            "loadBalancers": [{"loadBalancerName": "lb1"}]
        }])));
        assert_eq!(view.health[0].load_balancers, None);
        assert_eq!(view.health[0].status.as_deref(), Some("UP"));
    }

    #[test]
    fn health_state_is_the_canonical_string() {
        let view = project_instance(&instance(json!([])));
        assert_eq!(view.health_state, "Up");
    }
}
