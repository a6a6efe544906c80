//! Splitting the typed text into what is being completed.

/// A completion request, as read from the typed text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment<'a> {
    /// No `.`: the whole text is a prefix of a top-level name
    Global(&'a str),

    /// `a.b.partial`: complete `partial` among the members of `a.b`
    Attribute {
        /// Text before the last `.`
        expr: &'a str,
        /// `expr` split into its segments
        path: Vec<&'a str>,
        partial: &'a str,
    },

    /// Dotted text that is not an attribute chain (`a..b`, `f(x).y`, ...)
    Invalid,
}

impl<'a> Fragment<'a> {
    pub fn parse(text: &'a str) -> Self {
        let Some((expr, partial)) = text.rsplit_once('.') else {
            return Fragment::Global(text);
        };

        let path: Vec<&str> = expr.split('.').collect();
        let valid_path = path.iter().all(|segment| is_word(segment));
        let valid_partial = partial.chars().all(is_word_char);

        if valid_path && valid_partial {
            Fragment::Attribute {
                expr,
                path,
                partial,
            }
        } else {
            Fragment::Invalid
        }
    }
}

/// Letters, digits (any script) and underscore
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_word(segment: &str) -> bool {
    !segment.is_empty() && segment.chars().all(is_word_char)
}

/// A word that does not start with a digit: `name`, `_x1`, `café`
pub fn is_identifier(name: &str) -> bool {
    is_word(name) && !name.starts_with(|c: char| c.is_numeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_prefix() {
        assert_eq!(Fragment::parse("alph"), Fragment::Global("alph"));
        assert_eq!(Fragment::parse(""), Fragment::Global(""));
    }

    #[test]
    fn test_attribute_chain() {
        assert_eq!(
            Fragment::parse("obj.inner.na"),
            Fragment::Attribute {
                expr: "obj.inner",
                path: vec!["obj", "inner"],
                partial: "na",
            }
        );
    }

    #[test]
    fn test_trailing_dot() {
        assert_eq!(
            Fragment::parse("foo.bar."),
            Fragment::Attribute {
                expr: "foo.bar",
                path: vec!["foo", "bar"],
                partial: "",
            }
        );
    }

    #[test]
    fn test_unicode_identifiers() {
        assert_eq!(
            Fragment::parse("café.crème"),
            Fragment::Attribute {
                expr: "café",
                path: vec!["café"],
                partial: "crème",
            }
        );
    }

    #[test]
    fn test_invalid_chains() {
        assert_eq!(Fragment::parse("."), Fragment::Invalid);
        assert_eq!(Fragment::parse(".x"), Fragment::Invalid);
        assert_eq!(Fragment::parse("a..b"), Fragment::Invalid);
        assert_eq!(Fragment::parse("f(x).y"), Fragment::Invalid);
        assert_eq!(Fragment::parse("a.b-c"), Fragment::Invalid);
        assert_eq!(Fragment::parse("a b.c"), Fragment::Invalid);
    }

    #[test]
    fn test_identifiers() {
        assert!(is_identifier("name"));
        assert!(is_identifier("_private"));
        assert!(is_identifier("x1"));
        assert!(is_identifier("café"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("1x"));
        assert!(!is_identifier("content-type"));
        assert!(!is_identifier("a.b"));
        assert!(!is_identifier("first name"));
    }
}
