//! Read-only member discovery over runtime values.
//!
//! Every [`Value`] variant is introspectable. Host types that want to show up
//! in completion implement [`Introspectable`] themselves and are stored as
//! [`Value::Object`].

use crate::members;
use crate::namespace::Namespace;
use crate::value::Value;
use std::fmt;
use thiserror::Error;

/// Failure while listing or reading a member
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IntrospectError {
    /// Reading the attribute ran host code that failed
    #[error("attribute '{name}' could not be evaluated: {message}")]
    AttributeFailed { name: String, message: String },

    /// The value could not report its members at all
    #[error("member listing failed: {0}")]
    ListingFailed(String),
}

/// Capability of reporting member names and resolving members by name.
///
/// Implementations must not mutate the value. `member_names` may return
/// names in any order and may repeat a name; callers sort and dedupe.
pub trait Introspectable: fmt::Debug + Send + Sync {
    /// Names of every discoverable member
    fn member_names(&self) -> Result<Vec<String>, IntrospectError>;

    /// Resolve one member. `Ok(None)` means the member does not exist.
    fn attribute(&self, name: &str) -> Result<Option<Value>, IntrospectError>;

    fn is_callable(&self) -> bool {
        false
    }
}

impl Introspectable for Namespace {
    fn member_names(&self) -> Result<Vec<String>, IntrospectError> {
        Ok(self.names().map(str::to_string).collect())
    }

    fn attribute(&self, name: &str) -> Result<Option<Value>, IntrospectError> {
        Ok(self.get(name).cloned())
    }
}

impl Introspectable for Value {
    fn member_names(&self) -> Result<Vec<String>, IntrospectError> {
        match self {
            Value::Null | Value::Boolean(_) => Ok(Vec::new()),
            Value::Number(_) => members::NUMBER.member_names(),
            Value::String(_) => members::STRING.member_names(),
            Value::Vector(_) => members::VECTOR.member_names(),
            Value::Record(fields) => fields.read().member_names(),
            Value::Function(func) => func.member_names(),
            Value::Module(module) => module.member_names(),
            Value::Class(class) => class.member_names(),
            Value::Instance(instance) => instance.member_names(),
            Value::Object(object) => object.member_names(),
        }
    }

    fn attribute(&self, name: &str) -> Result<Option<Value>, IntrospectError> {
        match self {
            Value::Null | Value::Boolean(_) => Ok(None),
            Value::Number(_) => members::NUMBER.attribute(name),
            Value::String(_) => members::STRING.attribute(name),
            Value::Vector(_) => members::VECTOR.attribute(name),
            Value::Record(fields) => fields.read().attribute(name),
            Value::Function(func) => func.attribute(name),
            Value::Module(module) => module.attribute(name),
            Value::Class(class) => class.attribute(name),
            Value::Instance(instance) => instance.attribute(name),
            Value::Object(object) => object.attribute(name),
        }
    }

    fn is_callable(&self) -> bool {
        Value::is_callable(self)
    }
}
