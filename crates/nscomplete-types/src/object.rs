//! Object model: functions, modules, classes and instances.

use crate::introspect::{IntrospectError, Introspectable};
use crate::namespace::Namespace;
use crate::sync::{shared, Arc, Shared};
use crate::value::Value;
use std::fmt;

/// Callable value
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    name: String,
    /// Expected argument count (-1 for variadic)
    arity: i8,
}

impl Function {
    pub fn new(name: impl Into<String>, arity: i8) -> Self {
        Self {
            name: name.into(),
            arity,
        }
    }

    pub fn variadic(name: impl Into<String>) -> Self {
        Self::new(name, -1)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arity(&self) -> i8 {
        self.arity
    }
}

impl Introspectable for Function {
    fn member_names(&self) -> Result<Vec<String>, IntrospectError> {
        Ok(vec!["__name__".to_string()])
    }

    fn attribute(&self, name: &str) -> Result<Option<Value>, IntrospectError> {
        Ok((name == "__name__").then(|| Value::String(self.name.clone())))
    }

    fn is_callable(&self) -> bool {
        true
    }
}

/// A named namespace, such as the session's `__main__`
#[derive(Clone)]
pub struct Module {
    name: String,
    namespace: Shared<Namespace>,
}

impl Module {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_namespace(name, Namespace::new())
    }

    pub fn with_namespace(name: impl Into<String>, namespace: Namespace) -> Self {
        Self {
            name: name.into(),
            namespace: shared(namespace),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Live bindings of the module; writes are visible to every clone
    pub fn namespace(&self) -> &Shared<Namespace> {
        &self.namespace
    }
}

// A module may be bound inside itself; print the size instead of the bindings
impl fmt::Debug for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Module")
            .field("name", &self.name)
            .field("bindings", &self.namespace.read().len())
            .finish()
    }
}

impl PartialEq for Module {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && Arc::ptr_eq(&self.namespace, &other.namespace)
    }
}

impl Introspectable for Module {
    fn member_names(&self) -> Result<Vec<String>, IntrospectError> {
        let mut names = self.namespace.read().member_names()?;
        names.push("__name__".to_string());
        Ok(names)
    }

    fn attribute(&self, name: &str) -> Result<Option<Value>, IntrospectError> {
        if let Some(value) = self.namespace.read().get(name) {
            return Ok(Some(value.clone()));
        }
        Ok((name == "__name__").then(|| Value::String(self.name.clone())))
    }
}

/// Class with its own members and an ordered list of base classes.
///
/// Classes are immutable once built; an instance's mutable state lives in
/// its fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Class {
    name: String,
    members: Namespace,
    bases: Vec<Arc<Class>>,
}

impl Class {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Namespace::new(),
            bases: Vec::new(),
        }
    }

    pub fn with_member(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.members.insert(name, value);
        self
    }

    pub fn with_base(mut self, base: Arc<Class>) -> Self {
        self.bases.push(base);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn members(&self) -> &Namespace {
        &self.members
    }

    pub fn bases(&self) -> &[Arc<Class>] {
        &self.bases
    }

    /// Own member names followed by those of every base, depth first.
    /// Names overridden along the way appear more than once.
    pub fn ancestry_member_names(&self) -> Vec<String> {
        let mut names = Vec::new();
        self.collect_member_names(&mut names);
        names
    }

    fn collect_member_names(&self, names: &mut Vec<String>) {
        names.extend(self.members.names().map(str::to_string));
        for base in &self.bases {
            base.collect_member_names(names);
        }
    }

    /// Find a member on this class or the first base (depth first) defining it
    pub fn lookup(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.members.get(name) {
            return Some(value.clone());
        }
        self.bases.iter().find_map(|base| base.lookup(name))
    }
}

impl Introspectable for Class {
    fn member_names(&self) -> Result<Vec<String>, IntrospectError> {
        let mut names = self.ancestry_member_names();
        names.push("__name__".to_string());
        Ok(names)
    }

    fn attribute(&self, name: &str) -> Result<Option<Value>, IntrospectError> {
        if let Some(value) = self.lookup(name) {
            return Ok(Some(value));
        }
        Ok((name == "__name__").then(|| Value::String(self.name.clone())))
    }

    fn is_callable(&self) -> bool {
        true
    }
}

/// Instance of a class, with its own mutable fields
#[derive(Debug, Clone)]
pub struct Instance {
    class: Arc<Class>,
    fields: Shared<Namespace>,
}

impl Instance {
    pub fn new(class: Arc<Class>) -> Self {
        Self {
            class,
            fields: shared(Namespace::new()),
        }
    }

    pub fn with_field(self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.write().insert(name, value);
        self
    }

    pub fn class(&self) -> &Arc<Class> {
        &self.class
    }

    pub fn fields(&self) -> &Shared<Namespace> {
        &self.fields
    }
}

impl PartialEq for Instance {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.class, &other.class) && Arc::ptr_eq(&self.fields, &other.fields)
    }
}

impl Introspectable for Instance {
    fn member_names(&self) -> Result<Vec<String>, IntrospectError> {
        let mut names = self.fields.read().member_names()?;
        names.extend(self.class.ancestry_member_names());
        names.push("__class__".to_string());
        Ok(names)
    }

    fn attribute(&self, name: &str) -> Result<Option<Value>, IntrospectError> {
        if let Some(value) = self.fields.read().get(name) {
            return Ok(Some(value.clone()));
        }
        if let Some(value) = self.class.lookup(name) {
            return Ok(Some(value));
        }
        Ok((name == "__class__").then(|| Value::Class(Arc::clone(&self.class))))
    }
}
