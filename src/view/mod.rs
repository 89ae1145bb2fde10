//! Consumer-facing view projection.
//!
//! Two shapes leave this module. The summary view is the stable contract: a
//! fixed, flat, provider-agnostic field set safe for long-term consumers. The
//! expanded view is the opposite trade: every provider-specific field is
//! preserved as an open record, augmented with the owning account and the
//! parsed naming lineage, for diagnostics and completeness.
//!
//! Projection is a pure function of its input: same group, same view.

mod assembler;
mod instance;
mod server_group;

pub use assembler::{
    expanded_list, get_server_group, server_groups, summary_list, ServerGroupListing,
};
pub use instance::{project_instance, HealthView, InstanceView, LoadBalancerHealthView};
pub use server_group::{summarize, ServerGroupSummary};
