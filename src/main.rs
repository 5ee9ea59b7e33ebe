//! navshell - Entry Point
//!
//! Line-oriented host harness: reads one JSON dispatch event per stdin line,
//! routes it through the callback registry, and writes the outcome (outputs
//! plus any navigation request) as one JSON line on stdout. Stands in for the
//! dashboard's declarative event dispatcher.

use clap::Parser;
use serde::Deserialize;
use serde_json::{json, Value};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{error, info};

use navshell::binding::{register_core_callbacks, CallbackRegistry};
use navshell::model::AppError;

/// UI-state controller harness for a dashboard navigation shell
#[derive(Parser, Debug)]
#[command(name = "navshell")]
#[command(version)]
#[command(about = "Dispatch driver for the navigation shell's UI-state controllers")]
pub struct Args {
    /// Pixel width of the expanded sidebar (overrides config file)
    #[arg(long)]
    pub side_width: Option<u32>,

    /// Path to log file for tracing output
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// One dispatch event as received from the host, positional arguments and
/// all.
#[derive(Debug, Deserialize)]
struct DispatchEvent {
    namespace: String,
    callback: String,
    #[serde(default)]
    args: Vec<Value>,
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Resolve configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = navshell::config::load_config_with_precedence(args.config.clone())?;
        let merged = navshell::config::merge_config(config_file);
        let with_env = navshell::config::apply_env_overrides(merged);
        navshell::config::apply_cli_overrides(with_env, args.side_width, args.log_file.clone())
    };
    config.validate()?;

    navshell::logging::init(&config.log_file_path)?;

    info!(config = ?config, "navshell driver starting");

    let mut registry = CallbackRegistry::new();
    register_core_callbacks(&mut registry, config.core_config());

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_dispatch_loop(&registry, stdin.lock(), stdout.lock())
}

/// Serve dispatch events until the input stream ends.
///
/// Per-event failures (malformed JSON, unknown callback, bad arguments) are
/// logged and reported in-band; only stream-level I/O errors stop the loop.
fn run_dispatch_loop(
    registry: &CallbackRegistry,
    input: impl BufRead,
    mut output: impl Write,
) -> Result<(), AppError> {
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let reply = match serde_json::from_str::<DispatchEvent>(&line) {
            Ok(event) => {
                match registry.dispatch(&event.namespace, &event.callback, &event.args) {
                    Ok(outcome) => {
                        if let Some(path) = &outcome.navigate {
                            info!(path = %path, "navigation requested");
                        }
                        json!({
                            "outputs": outcome.outputs,
                            "navigate": outcome.navigate,
                        })
                    }
                    Err(err) => {
                        error!(%err, "dispatch failed");
                        json!({ "error": err.to_string() })
                    }
                }
            }
            Err(err) => {
                error!(%err, "malformed event");
                json!({ "error": format!("malformed event: {err}") })
            }
        };

        writeln!(output, "{reply}")?;
        output.flush()?;
    }

    Ok(())
}
