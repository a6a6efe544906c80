//! Name → value bindings.

use crate::value::Value;
use std::collections::btree_map::{self, BTreeMap};

/// A set of bindings, kept in ascending name order.
///
/// Iteration order is the enumeration order used for completion, so two
/// namespaces with the same bindings always list them identically.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Namespace {
    bindings: BTreeMap<String, Value>,
}

impl Namespace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name`, returning the value it replaced
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.bindings.insert(name.into(), value.into())
    }

    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.bindings.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Bound names in ascending order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bindings.keys().map(String::as_str)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
        self.bindings.iter()
    }

    /// Builder-style insert
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Namespace {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut namespace = Namespace::new();
        for (name, value) in iter {
            namespace.insert(name, value);
        }
        namespace
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for Namespace {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.insert(name, value);
        }
    }
}

impl<'a> IntoIterator for &'a Namespace {
    type Item = (&'a String, &'a Value);
    type IntoIter = btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.bindings.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_sorted() {
        let ns: Namespace = [("beta", 2.0), ("alpha", 1.0), ("Gamma", 3.0)]
            .into_iter()
            .collect();
        let names: Vec<&str> = ns.names().collect();
        assert_eq!(names, vec!["Gamma", "alpha", "beta"]);
    }

    #[test]
    fn test_insert_replaces() {
        let mut ns = Namespace::new();
        assert!(ns.insert("x", 1.0).is_none());
        let old = ns.insert("x", "two");
        assert_eq!(old, Some(Value::Number(1.0)));
        assert_eq!(ns.get("x"), Some(&Value::String("two".to_string())));
        assert_eq!(ns.len(), 1);
    }

    #[test]
    fn test_remove() {
        let mut ns = Namespace::new().with("x", true);
        assert!(ns.contains("x"));
        assert_eq!(ns.remove("x"), Some(Value::Boolean(true)));
        assert!(ns.is_empty());
    }
}
