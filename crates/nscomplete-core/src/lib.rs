//! Completion of identifiers and attribute paths against a live namespace
//!
//! This crate answers "what could the user be typing?" for the text before
//! the cursor, using the names actually bound in an interpreter session.
//!
//! # Features
//!
//! - **Completer**: enumerates candidates for a bare prefix or a dotted
//!   attribute chain, as a list, by index, or as an iterator
//! - **Session**: the host's modules, with `__main__` as the globals that
//!   completion reads from
//! - **Options**: keywords, callable decoration and private-name hiding
//!
//! # Example
//!
//! ```
//! use nscomplete_core::complete;
//! use nscomplete_types::Namespace;
//!
//! let ns = Namespace::new()
//!     .with("alpha", 1)
//!     .with("alphabet", "x")
//!     .with("beta", 2);
//!
//! assert_eq!(complete(&ns, "alph"), vec!["alpha", "alphabet"]);
//! ```

pub mod completer;
pub mod error;
pub mod fragment;
pub mod options;
pub mod session;

// Re-export main types for convenience
pub use completer::{complete, Candidates, Completer};
pub use error::CompletionError;
pub use fragment::Fragment;
pub use options::CompletionOptions;
pub use session::{ModuleContext, Session, MAIN_MODULE};
