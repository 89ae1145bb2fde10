//! Provider-facing data model.
//!
//! These types are the contract every provider backend speaks: loosely-typed
//! snapshots of clusters, server groups, and instances, deserialized from
//! whatever JSON the backend produces. Required attributes are plain fields;
//! optional capabilities are `Option`s so "not present" stays distinct from
//! "present but empty". Provider-specific attributes outside the contract are
//! preserved in flattened maps for the expanded view.
//!
//! All values are request-scoped snapshots; nothing here is mutated after
//! construction.

mod instance;
mod server_group;

pub use instance::{
    HealthRecord, HealthState, Instance, LoadBalancerHealth, LOAD_BALANCER_HEALTH_KIND,
};
pub use server_group::{Cluster, InstanceCounts, LaunchConfig, ServerGroup};

use serde::{Deserialize, Deserializer};

/// Deserialize a list field that providers may send as `null`.
pub(crate) fn null_to_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Deserialize a list field whose entries (or the whole list) may be `null`.
/// Null entries are dropped, not carried through as placeholders.
pub(crate) fn sparse_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<Option<T>>>::deserialize(deserializer)?
        .unwrap_or_default()
        .into_iter()
        .flatten()
        .collect())
}

/// Deserialize a timestamp providers send either as epoch milliseconds or as
/// an RFC 3339 string; normalized to epoch milliseconds.
pub(crate) fn timestamp_millis<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Millis(i64),
        Rfc3339(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Millis(millis) => Ok(millis),
        Raw::Rfc3339(text) => chrono::DateTime::parse_from_rfc3339(&text)
            .map(|t| t.timestamp_millis())
            .map_err(serde::de::Error::custom),
    }
}
