//! Interactive prompt over a session.
//!
//! There is no evaluator: lines bind JSON values into `__main__` or ask for
//! completions, and Tab completes against whatever is bound so far.

use anyhow::{anyhow, bail, Context, Result};
use nscomplete_core::fragment::is_word_char;
use nscomplete_core::{Session, MAIN_MODULE};
use nscomplete_types::snapshot::value_from_json;
use nscomplete_types::Value;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;
use std::path::PathBuf;
use tracing::debug;

use crate::output::render_candidates;
use crate::repl_helper::ReplHelper;

const PROMPT: &str = ">>> ";

const HELP: &str = "\
Commands:
  let NAME = JSON      bind a value in __main__
  del NAME             remove a binding
  :names               list bound names
  :complete FRAGMENT   print the candidates for FRAGMENT
  :help                show this help
  :quit                exit (Ctrl-D also works)
Press Tab to complete the name under the cursor.";

#[derive(Debug, PartialEq)]
pub enum Command {
    Let { name: String, value: Value },
    Del(String),
    Names,
    Complete(String),
    Help,
    Quit,
}

/// Parse one input line
pub fn parse_command(line: &str) -> Result<Command> {
    let line = line.trim();

    if let Some(rest) = line.strip_prefix("let ") {
        let (name, json) = rest
            .split_once('=')
            .ok_or_else(|| anyhow!("expected 'let NAME = JSON'"))?;
        let name = parse_name(name)?;
        let json: serde_json::Value = serde_json::from_str(json.trim())
            .with_context(|| format!("invalid JSON value for '{}'", name))?;
        let value = value_from_json(&json)?;
        return Ok(Command::Let { name, value });
    }

    if let Some(rest) = line.strip_prefix("del ") {
        return Ok(Command::Del(parse_name(rest)?));
    }

    if let Some(rest) = line.strip_prefix(":complete") {
        return Ok(Command::Complete(rest.trim().to_string()));
    }

    match line {
        ":names" => Ok(Command::Names),
        ":help" => Ok(Command::Help),
        ":quit" | ":q" => Ok(Command::Quit),
        _ => bail!("unknown command: {} (try :help)", line),
    }
}

fn parse_name(raw: &str) -> Result<String> {
    let name = raw.trim();
    let valid = name.chars().next().is_some_and(|c| !c.is_ascii_digit())
        && name.chars().all(is_word_char);
    if !valid {
        bail!("not a valid name: '{}'", name);
    }
    Ok(name.to_string())
}

/// Apply a command, returning text to print; `None` ends the loop
pub fn execute(session: &Session, command: Command) -> Result<Option<String>> {
    let main = session.module(MAIN_MODULE);
    let output = match command {
        Command::Let { name, value } => {
            debug!(name = %name, kind = value.type_name(), "binding");
            main.inject(name, value)?;
            String::new()
        }
        Command::Del(name) => match main.remove(&name)? {
            Some(_) => String::new(),
            None => bail!("name not bound: {}", name),
        },
        Command::Names => main.names()?.join("\n"),
        Command::Complete(fragment) => {
            let candidates = session.completions(&fragment)?;
            render_candidates(&candidates, false)?
        }
        Command::Help => HELP.to_string(),
        Command::Quit => return Ok(None),
    };
    Ok(Some(output))
}

fn history_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("nscomplete").join("history.txt"))
}

pub fn run(session: Session) -> Result<()> {
    let mut editor: Editor<ReplHelper, DefaultHistory> = Editor::new()?;
    editor.set_helper(Some(ReplHelper::new(session.clone())));

    let history = history_path();
    if let Some(path) = &history {
        if editor.load_history(path).is_err() {
            debug!(path = %path.display(), "no previous history");
        }
    }

    println!("nscomplete {} - type :help for commands", env!("CARGO_PKG_VERSION"));

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                editor.add_history_entry(line.as_str())?;

                match parse_command(&line).and_then(|command| execute(&session, command)) {
                    Ok(Some(output)) if !output.is_empty() => println!("{}", output),
                    Ok(Some(_)) => {}
                    Ok(None) => break,
                    Err(err) => eprintln!("Error: {:#}", err),
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }

    if let Some(path) = &history {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Error creating '{}'", dir.display()))?;
        }
        editor
            .save_history(path)
            .with_context(|| format!("Error writing history '{}'", path.display()))?;
    }

    Ok(())
}
