//! Runtime value model for nscomplete
//!
//! Values bound in a session namespace, the object model behind them
//! (functions, modules, classes, instances) and the [`Introspectable`]
//! capability that completion uses to discover member names.

pub mod introspect;
pub mod members;
pub mod namespace;
pub mod object;
pub mod snapshot;
pub mod sync;
pub mod value;

// Re-exports
pub use introspect::{IntrospectError, Introspectable};
pub use namespace::Namespace;
pub use object::{Class, Function, Instance, Module};
pub use snapshot::SnapshotError;
pub use value::Value;
