//! Resource-cluster naming convention parser.
//!
//! Cluster and server group names follow a fixed dash-delimited convention:
//! `<application>-<stack>-<detail>`, where `stack` and `detail` are optional
//! and `detail` may itself contain dashes. Server group names additionally
//! carry a trailing push-version suffix (`-v<digits>`) appended by deployment
//! tooling; the cluster name is everything before that suffix.

use serde::Serialize;

/// Structured parts of a composite resource-cluster identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedName {
    pub application: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    pub cluster: String,
}

/// Parse a composite identifier into its structured parts.
///
/// Never fails: any string, including one with no dashes, parses to at least
/// an `application` equal to the whole (version-stripped) string.
pub fn parse(name: &str) -> ParsedName {
    let cluster = strip_version_suffix(name);
    let mut segments = cluster.splitn(3, '-');

    let application = segments.next().unwrap_or_default().to_string();
    let stack = segments
        .next()
        .filter(|s| !s.is_empty())
        .map(str::to_string);
    let detail = segments
        .next()
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    ParsedName {
        application,
        stack,
        detail,
        cluster: cluster.to_string(),
    }
}

/// Drop a trailing `-v<digits>` push-version suffix, if one is present.
fn strip_version_suffix(name: &str) -> &str {
    if let Some((head, tail)) = name.rsplit_once('-') {
        if let Some(digits) = tail.strip_prefix('v') {
            if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) && !head.is_empty()
            {
                return head;
            }
        }
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_application_stack_and_detail() {
        let parsed = parse("myapp-stack1-detailA");
        assert_eq!(parsed.application, "myapp");
        assert_eq!(parsed.stack.as_deref(), Some("stack1"));
        assert_eq!(parsed.detail.as_deref(), Some("detailA"));
        assert_eq!(parsed.cluster, "myapp-stack1-detailA");
    }

    #[test]
    fn parses_bare_application() {
        let parsed = parse("myapp");
        assert_eq!(parsed.application, "myapp");
        assert_eq!(parsed.stack, None);
        assert_eq!(parsed.detail, None);
        assert_eq!(parsed.cluster, "myapp");
    }

    #[test]
    fn detail_keeps_its_internal_dashes() {
        let parsed = parse("myapp-stack1-some-long-detail");
        assert_eq!(parsed.detail.as_deref(), Some("some-long-detail"));
    }

    #[test]
    fn empty_stack_segment_is_absent() {
        let parsed = parse("myapp--detailA");
        assert_eq!(parsed.stack, None);
        assert_eq!(parsed.detail.as_deref(), Some("detailA"));
    }

    #[test]
    fn version_suffix_is_excluded_from_cluster() {
        let parsed = parse("myapp-stack1-detailA-v003");
        assert_eq!(parsed.cluster, "myapp-stack1-detailA");
        assert_eq!(parsed.detail.as_deref(), Some("detailA"));
    }

    #[test]
    fn non_version_tail_is_kept() {
        assert_eq!(parse("myapp-v1a").cluster, "myapp-v1a");
        assert_eq!(parse("myapp-version").cluster, "myapp-version");
        assert_eq!(parse("v001").cluster, "v001");
    }

    #[test]
    fn empty_string_still_parses() {
        let parsed = parse("");
        assert_eq!(parsed.application, "");
        assert_eq!(parsed.cluster, "");
    }
}
