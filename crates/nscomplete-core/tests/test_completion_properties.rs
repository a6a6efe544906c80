//! Property tests for completion enumeration
//!
//! Random namespaces (with nested records) are completed against random
//! fragments; the invariants below must hold for every pair.

use nscomplete_core::fragment::{is_identifier, Fragment};
use nscomplete_core::{complete, Completer};
use nscomplete_types::{Namespace, Value};
use proptest::prelude::*;
use std::collections::HashSet;

fn identifier() -> impl Strategy<Value = String> {
    "[a-c_][a-c0-9_]{0,4}"
}

fn leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i32>().prop_map(Value::from),
        "[a-z]{0,3}".prop_map(Value::from),
        any::<bool>().prop_map(Value::from),
    ]
}

fn value() -> impl Strategy<Value = Value> {
    leaf().prop_recursive(3, 24, 4, |inner| {
        prop::collection::btree_map(identifier(), inner, 0..4)
            .prop_map(|fields| Value::record(fields.into_iter().collect()))
    })
}

fn namespace() -> impl Strategy<Value = Namespace> {
    prop::collection::btree_map(identifier(), value(), 0..8)
        .prop_map(|bindings| bindings.into_iter().collect())
}

/// Keys as they arrive from JSON: empty, dotted, spaced, dashed
fn any_key() -> impl Strategy<Value = String> {
    prop_oneof![identifier(), "[a-c0-9_ .-]{0,4}"]
}

fn loose_namespace() -> impl Strategy<Value = Namespace> {
    let value = leaf().prop_recursive(3, 24, 4, |inner| {
        prop::collection::btree_map(any_key(), inner, 0..4)
            .prop_map(|fields| Value::record(fields.into_iter().collect()))
    });
    prop::collection::btree_map(any_key(), value, 0..8)
        .prop_map(|bindings| bindings.into_iter().collect())
}

fn fragment() -> impl Strategy<Value = String> {
    "[a-c0-9_.]{0,7}"
}

proptest! {
    #[test]
    fn prop_candidates_are_typeable_paths(ns in loose_namespace(), text in fragment()) {
        for candidate in complete(&ns, &text) {
            prop_assert!(
                matches!(
                    Fragment::parse(&candidate),
                    Fragment::Global(_) | Fragment::Attribute { .. }
                ),
                "{:?} does not parse as a name or attribute chain",
                candidate
            );
            prop_assert!(
                candidate.split('.').all(is_identifier),
                "{:?} has a segment that is not an identifier",
                candidate
            );
        }
    }

    #[test]
    fn prop_no_duplicates(ns in namespace(), text in fragment()) {
        let candidates = complete(&ns, &text);
        let unique: HashSet<&String> = candidates.iter().collect();
        prop_assert_eq!(unique.len(), candidates.len());
    }

    #[test]
    fn prop_candidates_extend_fragment(ns in namespace(), text in fragment()) {
        for candidate in complete(&ns, &text) {
            prop_assert!(
                candidate.starts_with(&text),
                "{:?} does not start with {:?}",
                candidate,
                text
            );
        }
    }

    #[test]
    fn prop_deterministic(ns in namespace(), text in fragment()) {
        prop_assert_eq!(complete(&ns, &text), complete(&ns, &text));
    }

    #[test]
    fn prop_sorted(ns in namespace(), text in fragment()) {
        let candidates = complete(&ns, &text);
        let mut sorted = candidates.clone();
        sorted.sort();
        prop_assert_eq!(candidates, sorted);
    }

    #[test]
    fn prop_empty_fragment_is_every_name(ns in namespace()) {
        let names: Vec<String> = ns.names().map(str::to_string).collect();
        prop_assert_eq!(complete(&ns, ""), names);
    }

    #[test]
    fn prop_pull_equals_list(ns in namespace(), text in fragment()) {
        let completer = Completer::new(&ns);
        let pulled: Vec<String> = (0..)
            .map_while(|state| completer.complete_at(&text, state))
            .collect();
        prop_assert_eq!(&pulled, &completer.complete(&text));
        prop_assert_eq!(completer.candidates(&text).collect::<Vec<_>>(), pulled);
    }

    #[test]
    fn prop_member_prefix_of_bound_record(name in identifier(), field in identifier()) {
        let record = Namespace::new().with(field.clone(), 1);
        let ns = Namespace::new().with(name.clone(), record);
        let text = format!("{}.{}", name, &field[..1]);
        let expected = format!("{}.{}", name, field);
        prop_assert_eq!(complete(&ns, &text), vec![expected]);
    }
}
