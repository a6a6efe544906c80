//! Completion enumeration over a namespace.
//!
//! Given the text typed so far, produce every identifier or attribute path
//! reachable from the namespace that extends it. Candidates come back in
//! ascending textual order, without duplicates.
//!
//! A bare prefix is matched against top-level names (and keywords and
//! builtins when configured). A dotted fragment `a.b.partial` resolves `a`
//! in the namespace, walks `b` as an attribute, and matches `partial`
//! against the members of the result. A chain that fails to resolve gives
//! no candidates: completion is advisory, it never reports an error.

use crate::fragment::{is_identifier, Fragment};
use crate::options::CompletionOptions;
use nscomplete_types::{Introspectable, Namespace, Value};
use std::collections::{BTreeSet, HashSet};
use std::iter::FusedIterator;
use tracing::{debug, trace};

static PLAIN: CompletionOptions = CompletionOptions::PLAIN;

/// Complete `fragment` against `namespace` with default options
pub fn complete(namespace: &Namespace, fragment: &str) -> Vec<String> {
    Completer::new(namespace).complete(fragment)
}

/// Borrowing view over a namespace that answers completion requests.
///
/// The completer keeps no state between requests; every call derives its
/// candidates from the namespace as it is at that moment.
#[derive(Debug, Clone, Copy)]
pub struct Completer<'a> {
    namespace: &'a Namespace,
    builtins: Option<&'a Namespace>,
    options: &'a CompletionOptions,
}

impl<'a> Completer<'a> {
    pub fn new(namespace: &'a Namespace) -> Self {
        Self {
            namespace,
            builtins: None,
            options: &PLAIN,
        }
    }

    /// Names looked up after the namespace; the namespace shadows them
    pub fn with_builtins(mut self, builtins: &'a Namespace) -> Self {
        self.builtins = Some(builtins);
        self
    }

    pub fn with_options(mut self, options: &'a CompletionOptions) -> Self {
        self.options = options;
        self
    }

    /// Every candidate for `text`, in order
    pub fn complete(&self, text: &str) -> Vec<String> {
        let matches = match Fragment::parse(text) {
            Fragment::Global(prefix) => self.global_matches(prefix),
            Fragment::Attribute {
                expr,
                path,
                partial,
            } => self.attr_matches(expr, &path, partial),
            Fragment::Invalid => {
                debug!(fragment = text, "not an attribute chain");
                Vec::new()
            }
        };
        trace!(fragment = text, count = matches.len(), "completion request");
        matches
    }

    /// The candidate at position `state`, or `None` past the last one.
    ///
    /// Pulling `0, 1, 2, ...` until `None` yields exactly [`Self::complete`].
    pub fn complete_at(&self, text: &str, state: usize) -> Option<String> {
        self.complete(text).into_iter().nth(state)
    }

    /// Candidates as an iterator; call again to restart
    pub fn candidates(&self, text: &str) -> Candidates {
        Candidates {
            inner: self.complete(text).into_iter(),
        }
    }

    fn global_matches(&self, prefix: &str) -> Vec<String> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut matches = Vec::new();

        for keyword in &self.options.keywords {
            if keyword.starts_with(prefix)
                && is_identifier(keyword)
                && seen.insert(keyword.as_str())
            {
                if self.options.decorate {
                    matches.push(format!("{} ", keyword));
                } else {
                    matches.push(keyword.clone());
                }
            }
        }

        let scopes = std::iter::once(self.namespace).chain(self.builtins);
        for scope in scopes {
            for (name, value) in scope {
                if name.starts_with(prefix) && is_identifier(name) && seen.insert(name.as_str()) {
                    matches.push(self.decorate(name.clone(), value));
                }
            }
        }

        matches.sort();
        matches
    }

    fn attr_matches(&self, expr: &str, path: &[&str], partial: &str) -> Vec<String> {
        let Some(base) = self.resolve(path) else {
            return Vec::new();
        };

        // Keys that cannot be typed as an attribute are not offered
        let names: BTreeSet<String> = match base.member_names() {
            Ok(names) => names.into_iter().filter(|n| is_identifier(n)).collect(),
            Err(err) => {
                debug!(expr, error = %err, "could not list members");
                return Vec::new();
            }
        };

        // Private names stay hidden until the user types the underscore,
        // unless hiding would leave nothing to offer.
        let mut hidden = match partial {
            _ if self.options.show_private => None,
            "" => Some("_"),
            "_" => Some("__"),
            _ => None,
        };

        loop {
            let mut matches: Vec<String> = names
                .iter()
                .filter(|name| name.starts_with(partial))
                .filter(|name| hidden.map_or(true, |h| !name.starts_with(h)))
                .filter_map(|name| self.member_candidate(&base, expr, name))
                .collect();

            if !matches.is_empty() || hidden.is_none() {
                matches.sort();
                return matches;
            }

            hidden = match hidden {
                Some("_") => Some("__"),
                _ => None,
            };
        }
    }

    /// Build `expr.name`, or `None` when reading the member fails
    fn member_candidate(&self, base: &Value, expr: &str, name: &str) -> Option<String> {
        let candidate = format!("{}.{}", expr, name);
        match base.attribute(name) {
            Ok(Some(value)) => Some(self.decorate(candidate, &value)),
            // Listed but unset; still a valid name to type
            Ok(None) => Some(candidate),
            Err(err) => {
                debug!(member = name, error = %err, "skipping member");
                None
            }
        }
    }

    fn decorate(&self, mut candidate: String, value: &Value) -> String {
        if self.options.decorate && value.is_callable() {
            candidate.push('(');
        }
        candidate
    }

    /// Walk `path` from the namespace; `None` at the first missing link
    fn resolve(&self, path: &[&str]) -> Option<Value> {
        let (first, rest) = path.split_first()?;

        let mut value = self
            .namespace
            .get(first)
            .or_else(|| self.builtins.and_then(|b| b.get(first)))
            .cloned();
        if value.is_none() {
            debug!(name = *first, "unbound name");
        }

        for segment in rest {
            value = match value?.attribute(segment) {
                Ok(Some(next)) => Some(next),
                Ok(None) => {
                    debug!(attribute = *segment, "no such attribute");
                    None
                }
                Err(err) => {
                    debug!(attribute = *segment, error = %err, "attribute lookup failed");
                    None
                }
            };
        }

        value
    }
}

/// Finite, ordered sequence of candidates for one request
#[derive(Debug, Clone)]
pub struct Candidates {
    inner: std::vec::IntoIter<String>,
}

impl Iterator for Candidates {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Candidates {}

impl FusedIterator for Candidates {}
