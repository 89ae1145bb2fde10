//! Instances and their heterogeneous health-check records.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Health record kind whose entries carry load-balancer attachments.
pub const LOAD_BALANCER_HEALTH_KIND: &str = "LoadBalancer";

/// A single compute instance inside a server group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instance {
    pub name: String,
    pub health_state: HealthState,
    #[serde(deserialize_with = "super::timestamp_millis")]
    pub launch_time: i64,
    pub zone: String,
    #[serde(default, deserialize_with = "super::null_to_empty")]
    pub health: Vec<HealthRecord>,
}

/// Canonical rollup of an instance's health.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub enum HealthState {
    Up,
    Down,
    OutOfService,
    Starting,
    #[default]
    Unknown,
}

impl fmt::Display for HealthState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            HealthState::Up => "Up",
            HealthState::Down => "Down",
            HealthState::OutOfService => "OutOfService",
            HealthState::Starting => "Starting",
            HealthState::Unknown => "Unknown",
        };
        f.write_str(label)
    }
}

impl FromStr for HealthState {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Up" => Ok(HealthState::Up),
            "Down" => Ok(HealthState::Down),
            "OutOfService" => Ok(HealthState::OutOfService),
            "Starting" => Ok(HealthState::Starting),
            "Unknown" => Ok(HealthState::Unknown),
            _ => Err(()),
        }
    }
}

// Providers disagree on health vocabulary; anything outside the canonical set
// collapses to Unknown rather than failing the whole payload.
impl<'de> Deserialize<'de> for HealthState {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        Ok(text.parse().unwrap_or(HealthState::Unknown))
    }
}

/// One health-check entry on an instance.
///
/// Only the `type` tag is guaranteed; the rest varies per health source, and
/// `loadBalancers` is meaningful only for [`LOAD_BALANCER_HEALTH_KIND`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthRecord {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub load_balancers: Option<Vec<LoadBalancerHealth>>,
}

/// A load-balancer attachment reported inside a health record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadBalancerHealth {
    pub load_balancer_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub load_balancer_type: Option<String>,
}
