//! Completion behavior switches.

use serde::Deserialize;

/// Options controlling which candidates are produced and how they look.
///
/// The defaults produce plain identifiers and dotted paths only, with no
/// keywords.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompletionOptions {
    /// Language keywords offered when completing a bare identifier
    pub keywords: Vec<String>,

    /// Append `(` to callable candidates and a space to keywords
    pub decorate: bool,

    /// Offer `_`-prefixed members even when the partial attribute is empty
    pub show_private: bool,
}

impl CompletionOptions {
    pub const PLAIN: CompletionOptions = CompletionOptions {
        keywords: Vec::new(),
        decorate: false,
        show_private: false,
    };

    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    pub fn decorated(mut self, decorate: bool) -> Self {
        self.decorate = decorate;
        self
    }

    pub fn private_members(mut self, show: bool) -> Self {
        self.show_private = show;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_plain() {
        assert_eq!(CompletionOptions::default(), CompletionOptions::PLAIN);
    }

    #[test]
    fn test_deserialize_partial() {
        let options: CompletionOptions = serde_json::from_str(r#"{"decorate": true}"#).unwrap();
        assert!(options.decorate);
        assert!(!options.show_private);
        assert!(options.keywords.is_empty());
    }

    #[test]
    fn test_deserialize_rejects_unknown_fields() {
        let result: Result<CompletionOptions, _> = serde_json::from_str(r#"{"fuzzy": true}"#);
        assert!(result.is_err());
    }
}
