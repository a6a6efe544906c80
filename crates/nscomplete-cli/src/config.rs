//! Session setup from command-line arguments and files.

use anyhow::{Context, Result};
use clap::Args;
use nscomplete_core::{CompletionOptions, Session, MAIN_MODULE};
use nscomplete_types::snapshot::namespace_from_str;
use nscomplete_types::{Module, Namespace};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Where the session's names and completion options come from
#[derive(Args, Debug, Default, Clone)]
pub struct SessionArgs {
    /// JSON snapshot bound as the session globals
    #[arg(short, long, value_name = "FILE")]
    pub namespace: Option<PathBuf>,

    /// JSON snapshot of builtin names (shadowed by globals)
    #[arg(short, long, value_name = "FILE")]
    pub builtins: Option<PathBuf>,

    /// JSON file with completion options
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Offer a keyword when completing bare names (repeatable)
    #[arg(short, long = "keyword", value_name = "WORD")]
    pub keywords: Vec<String>,

    /// Append "(" to callables and a space to keywords
    #[arg(long, overrides_with = "no_decorate")]
    pub decorate: bool,

    /// Plain candidates, even if the config enables decoration
    #[arg(long, overrides_with = "decorate")]
    pub no_decorate: bool,

    /// Offer _-prefixed members without typing the underscore
    #[arg(long, overrides_with = "no_show_private")]
    pub show_private: bool,

    /// Hide _-prefixed members, even if the config shows them
    #[arg(long, overrides_with = "show_private")]
    pub no_show_private: bool,
}

/// The value a `--x` / `--no-x` pair sets, if either was given
fn switch(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

impl SessionArgs {
    /// Options from the config file, with flags layered on top
    pub fn options(&self) -> Result<CompletionOptions> {
        let mut options = match &self.config {
            Some(path) => load_options(path)?,
            None => CompletionOptions::default(),
        };

        if !self.keywords.is_empty() {
            options.keywords = self.keywords.clone();
        }
        if let Some(decorate) = switch(self.decorate, self.no_decorate) {
            options.decorate = decorate;
        }
        if let Some(show) = switch(self.show_private, self.no_show_private) {
            options.show_private = show;
        }

        Ok(options)
    }

    /// A session whose `__main__` holds the snapshot (or nothing)
    pub fn build_session(&self) -> Result<Session> {
        let globals = match &self.namespace {
            Some(path) => load_namespace(path)?,
            None => Namespace::new(),
        };
        let builtins = match &self.builtins {
            Some(path) => load_namespace(path)?,
            None => Namespace::new(),
        };
        debug!(
            globals = globals.len(),
            builtins = builtins.len(),
            "session loaded"
        );

        let session = Session::detached()
            .with_builtins(builtins)
            .with_options(self.options()?);
        session.register(Module::with_namespace(MAIN_MODULE, globals));
        Ok(session)
    }
}

pub fn load_options(path: &Path) -> Result<CompletionOptions> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Error reading config '{}'", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Invalid config '{}'", path.display()))
}

pub fn load_namespace(path: &Path) -> Result<Namespace> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Error reading namespace '{}'", path.display()))?;
    namespace_from_str(&contents)
        .with_context(|| format!("Invalid namespace snapshot '{}'", path.display()))
}
