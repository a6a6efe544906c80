//! Error types for session-level completion

use thiserror::Error;

/// Errors raised by [`crate::Session`].
///
/// Completion itself never fails; these signal a host that was not set up
/// correctly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompletionError {
    /// The session has no main module to take globals from
    #[error("session has no '{0}' module; the host did not initialize its globals")]
    NamespaceUnavailable(String),

    /// A module was addressed by name but never registered
    #[error("module not found: {0}")]
    ModuleNotFound(String),
}
