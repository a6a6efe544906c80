use anyhow::Result;
use clap::{Parser, Subcommand};

mod config;
mod logging;
mod output;
mod repl;
mod repl_helper;

use config::SessionArgs;

/// nscomplete - completion over a live session namespace
#[derive(Parser)]
#[command(name = "nscomplete")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Complete identifiers and attribute paths against a session namespace", long_about = "nscomplete\n\nSuggests completions for partially typed names using the values bound in a\nsession. Namespaces are supplied as JSON snapshots:\n  - one-shot completion with plain or JSON output\n  - an interactive prompt with Tab completion")]
struct Cli {
    /// Log filter, e.g. "debug" or "nscomplete_core=trace" (overrides RUST_LOG)
    #[arg(long, global = true, value_name = "FILTER")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the completions of a fragment
    Complete {
        /// Partial identifier or dotted path (empty lists every name)
        #[arg(default_value = "", allow_hyphen_values = true)]
        fragment: String,

        /// Output as a JSON array of strings
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        session: SessionArgs,
    },
    /// Start an interactive prompt with Tab completion
    Repl {
        #[command(flatten)]
        session: SessionArgs,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init_logger(cli.log_level.as_deref());

    let result = match cli.command {
        Commands::Complete {
            fragment,
            json,
            session,
        } => complete_command(&fragment, json, &session),
        Commands::Repl { session } => repl_command(&session),
    };

    if let Err(err) = result {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn complete_command(fragment: &str, json: bool, args: &SessionArgs) -> Result<()> {
    let session = args.build_session()?;
    let candidates = session.completions(fragment)?;
    let rendered = output::render_candidates(&candidates, json)?;
    if !rendered.is_empty() {
        println!("{}", rendered);
    }
    Ok(())
}

fn repl_command(args: &SessionArgs) -> Result<()> {
    let session = args.build_session()?;
    repl::run(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_complete() {
        let cli = Cli::try_parse_from([
            "nscomplete",
            "complete",
            "obj.na",
            "--json",
            "--namespace",
            "ns.json",
            "-k",
            "if",
            "-k",
            "else",
        ])
        .unwrap();

        match cli.command {
            Commands::Complete {
                fragment,
                json,
                session,
            } => {
                assert_eq!(fragment, "obj.na");
                assert!(json);
                assert_eq!(session.namespace.as_deref(), Some(std::path::Path::new("ns.json")));
                assert_eq!(session.keywords, vec!["if", "else"]);
            }
            _ => panic!("expected complete"),
        }
    }

    #[test]
    fn test_fragment_defaults_to_empty() {
        let cli = Cli::try_parse_from(["nscomplete", "complete"]).unwrap();
        assert!(matches!(cli.command, Commands::Complete { ref fragment, .. } if fragment.is_empty()));
    }

    #[test]
    fn test_global_log_level() {
        let cli = Cli::try_parse_from(["nscomplete", "repl", "--log-level", "debug"]).unwrap();
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
    }
}
