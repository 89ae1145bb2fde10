//! Property-based tests for the naming parser using proptest
//!
//! The parser must be total and structure-preserving for any input, not just
//! well-formed names.

use fleetview::naming;
use proptest::prelude::*;

proptest! {
    /// Any string parses; the application is always a prefix of the input.
    #[test]
    fn parse_is_total(input in ".*") {
        let parsed = naming::parse(&input);
        prop_assert!(input.starts_with(&parsed.application));
        prop_assert!(input.starts_with(&parsed.cluster));
    }

    /// The application segment never contains the delimiter.
    #[test]
    fn application_has_no_delimiter(input in ".*") {
        prop_assert!(!naming::parse(&input).application.contains('-'));
    }

    /// Well-formed names split into their three parts and reassemble.
    #[test]
    fn structured_names_round_trip(
        app in "[a-z]{1,8}",
        stack in "[a-z0-9]{1,8}",
        detail in "[a-z]{1,8}(-[a-z]{1,8}){0,2}"
    ) {
        let name = format!("{}-{}-{}", app, stack, detail);
        let parsed = naming::parse(&name);
        prop_assert_eq!(&parsed.application, &app);
        prop_assert_eq!(parsed.stack.as_deref(), Some(stack.as_str()));
        prop_assert_eq!(parsed.detail.as_deref(), Some(detail.as_str()));
        prop_assert_eq!(&parsed.cluster, &name);
    }

    /// A push-version suffix belongs to the server group, never the cluster.
    #[test]
    fn version_suffix_is_stripped_from_cluster(
        app in "[a-z]{1,8}",
        stack in "[a-z]{1,8}",
        version in 0u32..9999
    ) {
        let name = format!("{}-{}-v{:03}", app, stack, version);
        let parsed = naming::parse(&name);
        prop_assert_eq!(parsed.cluster, format!("{}-{}", app, stack));
        prop_assert_eq!(parsed.stack.as_deref(), Some(stack.as_str()));
        prop_assert_eq!(parsed.detail, None);
    }

    /// Whatever the input, re-parsing the cluster keeps the application.
    #[test]
    fn application_is_stable_under_reparsing(input in ".*") {
        let first = naming::parse(&input);
        let second = naming::parse(&first.cluster);
        prop_assert_eq!(first.application, second.application);
    }
}
