use crate::introspect::Introspectable;
use crate::namespace::Namespace;
use crate::object::{Class, Function, Instance, Module};
use crate::sync::{shared, Arc, Shared};
use std::fmt;

/// A runtime value bound in a session namespace.
#[derive(Debug, Clone)]
pub enum Value {
    /// Absence of value
    Null,
    Boolean(bool),
    Number(f64),
    String(String),
    /// List with shared mutable ownership, so two bindings can alias one list
    Vector(Shared<Vec<Value>>),
    /// Record (object/map) with shared mutable ownership.
    /// Its members are exactly its keys.
    Record(Shared<Namespace>),
    /// Callable with a name and an arity
    Function(Function),
    Module(Module),
    /// Class object; members are inherited by instances and subclasses
    Class(Arc<Class>),
    Instance(Instance),
    /// Opaque host value that describes its own members
    Object(Arc<dyn Introspectable>),
}

impl Value {
    /// Create a record value from a namespace
    pub fn record(namespace: Namespace) -> Value {
        Value::Record(shared(namespace))
    }

    /// Create a vector value
    pub fn vector(items: Vec<Value>) -> Value {
        Value::Vector(shared(items))
    }

    /// Wrap a host object
    pub fn object<T: Introspectable + 'static>(object: T) -> Value {
        Value::Object(Arc::new(object))
    }

    /// Name of the value's type, for display and diagnostics
    pub fn type_name(&self) -> &str {
        match self {
            Value::Null => "null",
            Value::Boolean(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Vector(_) => "vector",
            Value::Record(_) => "record",
            Value::Function(_) => "function",
            Value::Module(_) => "module",
            Value::Class(_) => "class",
            Value::Instance(instance) => instance.class().name(),
            Value::Object(_) => "object",
        }
    }

    /// Whether calling this value makes sense (functions, classes and
    /// callable host objects)
    pub fn is_callable(&self) -> bool {
        match self {
            Value::Function(_) | Value::Class(_) => true,
            Value::Object(object) => object.is_callable(),
            _ => false,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Vector(a), Value::Vector(b)) => Arc::ptr_eq(a, b) || *a.read() == *b.read(),
            (Value::Record(a), Value::Record(b)) => Arc::ptr_eq(a, b) || *a.read() == *b.read(),
            (Value::Function(a), Value::Function(b)) => a == b,
            (Value::Module(a), Value::Module(b)) => a == b,
            (Value::Class(a), Value::Class(b)) => Arc::ptr_eq(a, b) || a == b,
            (Value::Instance(a), Value::Instance(b)) => a == b,
            // Host objects have no structural equality; compare identity
            (Value::Object(a), Value::Object(b)) => {
                std::ptr::eq(Arc::as_ptr(a) as *const u8, Arc::as_ptr(b) as *const u8)
            }
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "\"{}\"", s),
            Value::Vector(items) => write!(f, "<vector of {}>", items.read().len()),
            Value::Record(fields) => write!(f, "<record with {} fields>", fields.read().len()),
            Value::Function(func) => write!(f, "<function {}>", func.name()),
            Value::Module(module) => write!(f, "<module {}>", module.name()),
            Value::Class(class) => write!(f, "<class {}>", class.name()),
            Value::Instance(instance) => write!(f, "<{} instance>", instance.class().name()),
            Value::Object(_) => write!(f, "<object>"),
        }
    }
}

// Conversions so bindings can be written with plain Rust literals
impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Function> for Value {
    fn from(func: Function) -> Self {
        Value::Function(func)
    }
}

impl From<Module> for Value {
    fn from(module: Module) -> Self {
        Value::Module(module)
    }
}

impl From<Class> for Value {
    fn from(class: Class) -> Self {
        Value::Class(Arc::new(class))
    }
}

impl From<Arc<Class>> for Value {
    fn from(class: Arc<Class>) -> Self {
        Value::Class(class)
    }
}

impl From<Instance> for Value {
    fn from(instance: Instance) -> Self {
        Value::Instance(instance)
    }
}

impl From<Namespace> for Value {
    fn from(namespace: Namespace) -> Self {
        Value::record(namespace)
    }
}
