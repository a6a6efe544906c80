//! Shared-ownership primitives for session values.
//!
//! Containers reachable from several bindings (records, vectors, module and
//! instance namespaces) are held as `Arc<RwLock<T>>`. We use parking_lot
//! since its locks never poison and read guards are cheap.

pub use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
pub use std::sync::Arc;

/// Alias for the common pattern Arc<RwLock<T>>
pub type Shared<T> = Arc<RwLock<T>>;

/// Wrap a value for shared mutable ownership
pub fn shared<T>(value: T) -> Shared<T> {
    Arc::new(RwLock::new(value))
}
