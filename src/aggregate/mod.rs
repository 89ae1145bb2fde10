//! Provider fan-out and result merging.
//!
//! Both operations fan out across providers concurrently and merge results
//! deterministically in provider iteration order, whatever the completion
//! order. The failure policy is fail-fast: the first provider error aborts
//! the join, drops the in-flight siblings, and propagates unmodified. There
//! is no partial-failure tolerance, no retry, and no caching here.

use crate::error::{Error, Result};
use crate::model::{Cluster, ServerGroup};
use crate::provider::ProviderSource;
use futures::future;
use std::sync::Arc;

/// Look up one server group by its exact `(account, region, name)` key across
/// every provider.
///
/// Identical results from different providers collapse to one under the
/// required-subset equality of [`ServerGroup`]. If providers return distinct
/// groups for the same key, the first in provider iteration order wins; the
/// ambiguity is logged, not resolved.
pub async fn lookup_exact(
    providers: &[Arc<dyn ProviderSource>],
    account: &str,
    region: &str,
    name: &str,
) -> Result<ServerGroup> {
    tracing::debug!(
        account,
        region,
        name,
        "looking up server group across {} providers",
        providers.len()
    );

    let lookups = providers
        .iter()
        .map(|provider| provider.lookup_server_group(account, region, name));
    let results = future::try_join_all(lookups).await?;

    let mut merged: Vec<ServerGroup> = Vec::new();
    for group in results.into_iter().flatten() {
        if !merged.contains(&group) {
            merged.push(group);
        }
    }

    if merged.len() > 1 {
        tracing::warn!(
            name,
            account,
            region,
            "{} providers returned distinct server groups for one key; keeping the first",
            merged.len()
        );
    }

    merged.into_iter().next().ok_or_else(|| Error::NotFound {
        name: name.to_string(),
        account: account.to_string(),
        region: region.to_string(),
    })
}

/// List every cluster the (optionally filtered) providers know for an
/// application.
///
/// `cloud_provider` filters providers by case-insensitive id match; `None` or
/// an empty string selects all of them. Provider order is preserved in the
/// output; each provider's own cluster ordering is taken as-is.
pub async fn list_by_application(
    providers: &[Arc<dyn ProviderSource>],
    application: &str,
    cloud_provider: Option<&str>,
) -> Result<Vec<Cluster>> {
    let filter = cloud_provider.filter(|f| !f.is_empty());
    let selected: Vec<_> = providers
        .iter()
        .filter(|provider| match filter {
            Some(wanted) => provider.cloud_provider_id().eq_ignore_ascii_case(wanted),
            None => true,
        })
        .collect();

    tracing::debug!(
        application,
        "listing clusters across {} of {} providers",
        selected.len(),
        providers.len()
    );

    let listings = selected
        .iter()
        .map(|provider| provider.list_clusters(application));
    let results = future::try_join_all(listings).await?;

    Ok(results
        .into_iter()
        .flatten()
        .flat_map(|clusters| clusters.into_values())
        .collect())
}
