//! Interpreter session state visible to completion.
//!
//! A [`Session`] is the host's handle on the running interpreter's modules.
//! The namespace of the `__main__` module is the session globals: what a
//! user typing at the prompt can reach by name. Clones of a session share
//! the same modules, so a REPL and its completer observe the same bindings.

use crate::completer::Completer;
use crate::error::CompletionError;
use crate::options::CompletionOptions;
use nscomplete_types::sync::{Arc, Shared};
use nscomplete_types::{Module, Namespace, Value};
use std::collections::HashMap;
use tracing::debug;

/// Name of the module whose namespace is the session globals
pub const MAIN_MODULE: &str = "__main__";

#[derive(Debug, Clone, Default)]
pub struct Session {
    modules: Shared<HashMap<String, Module>>,
    builtins: Shared<Namespace>,
    options: Arc<CompletionOptions>,
}

impl Session {
    /// Session with an empty `__main__` module
    pub fn new() -> Self {
        let session = Self::detached();
        session.register(Module::new(MAIN_MODULE));
        session
    }

    /// Session without any module; completion fails until `__main__` is
    /// registered
    pub fn detached() -> Self {
        Self::default()
    }

    pub fn with_options(mut self, options: CompletionOptions) -> Self {
        self.options = Arc::new(options);
        self
    }

    pub fn with_builtins(self, builtins: Namespace) -> Self {
        self.set_builtins(builtins);
        self
    }

    pub fn options(&self) -> &CompletionOptions {
        &self.options
    }

    /// Live builtins; writes are seen by the next request
    pub fn builtins(&self) -> &Shared<Namespace> {
        &self.builtins
    }

    /// Replace the builtins, returning the previous set
    pub fn set_builtins(&self, builtins: Namespace) -> Namespace {
        debug!(count = builtins.len(), "replacing builtins");
        std::mem::replace(&mut *self.builtins.write(), builtins)
    }

    /// Register a module, returning the one it replaced
    pub fn register(&self, module: Module) -> Option<Module> {
        debug!(module = module.name(), "registering module");
        self.modules
            .write()
            .insert(module.name().to_string(), module)
    }

    /// A registered module as a value, ready to bind in a namespace
    pub fn import(&self, name: &str) -> Result<Value, CompletionError> {
        self.modules
            .read()
            .get(name)
            .cloned()
            .map(Value::Module)
            .ok_or_else(|| CompletionError::ModuleNotFound(name.to_string()))
    }

    /// Handle for injecting members into a module
    pub fn module(&self, name: impl Into<String>) -> ModuleContext<'_> {
        ModuleContext {
            session: self,
            name: name.into(),
        }
    }

    /// The session globals
    pub fn globals(&self) -> Result<Shared<Namespace>, CompletionError> {
        self.modules
            .read()
            .get(MAIN_MODULE)
            .map(|main| Arc::clone(main.namespace()))
            .ok_or_else(|| CompletionError::NamespaceUnavailable(MAIN_MODULE.to_string()))
    }

    /// Every candidate for `code` against the current globals
    pub fn completions(&self, code: &str) -> Result<Vec<String>, CompletionError> {
        // Work on a copy so no lock is held while host objects are inspected
        let globals = self.globals()?.read().clone();
        let builtins = self.builtins.read().clone();

        Ok(Completer::new(&globals)
            .with_builtins(&builtins)
            .with_options(&self.options)
            .complete(code))
    }

    /// The candidate at `state`, for hosts that pull one at a time
    pub fn completion_at(&self, code: &str, state: usize) -> Result<Option<String>, CompletionError> {
        Ok(self.completions(code)?.into_iter().nth(state))
    }
}

/// Members of one module, addressed through the session
#[derive(Debug)]
pub struct ModuleContext<'s> {
    session: &'s Session,
    name: String,
}

impl ModuleContext<'_> {
    fn namespace(&self) -> Result<Shared<Namespace>, CompletionError> {
        self.session
            .modules
            .read()
            .get(&self.name)
            .map(|module| Arc::clone(module.namespace()))
            .ok_or_else(|| CompletionError::ModuleNotFound(self.name.clone()))
    }

    /// Bind `member` in the module, returning the value it replaced
    pub fn inject(
        &self,
        member: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<Option<Value>, CompletionError> {
        let namespace = self.namespace()?;
        let previous = namespace.write().insert(member, value);
        Ok(previous)
    }

    pub fn remove(&self, member: &str) -> Result<Option<Value>, CompletionError> {
        let namespace = self.namespace()?;
        let removed = namespace.write().remove(member);
        Ok(removed)
    }

    /// Current member names in order
    pub fn names(&self) -> Result<Vec<String>, CompletionError> {
        let namespace = self.namespace()?;
        let names = namespace.read().names().map(str::to_string).collect();
        Ok(names)
    }
}
