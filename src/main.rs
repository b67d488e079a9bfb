//! `assurance-validate` entry point.
//!
//! Provides `list` and `run` subcommands for listing the shipped validators
//! and evaluating them against a captured session file.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;

use assurance_toolkit::Session;
use assurance_validators::config::{self, OutputFormat, ValidatorsConfig};
use assurance_validators::logging;
use assurance_validators::report::Report;
use assurance_validators::validator::Validator;
use assurance_validators::validators;

/// Validate a captured mobile SDK session.
#[derive(Parser)]
#[command(name = "assurance-validate", version, about)]
struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    command: Command,
}

/// Available CLI subcommands.
#[derive(Subcommand)]
enum Command {
    /// List the validators and what they check.
    List,
    /// Evaluate validators against a session file.
    Run {
        /// Session document (`.json`) or event stream (`.jsonl`).
        session: PathBuf,

        /// Validator to run. Repeat to run several; defaults to the configured set.
        #[arg(long = "validator", value_name = "NAME")]
        validators: Vec<String>,

        /// Output format. Overrides the config file.
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Config file. Defaults to `$ASSURANCE_VALIDATORS_CONFIG`, then `~/.assurance/validators.toml`.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Sort events newest first before evaluating.
        #[arg(long)]
        sort_events: bool,
    },
}

/// Exit status when any validator returns `not matched`.
const EXIT_NOT_MATCHED: u8 = 1;

/// Exit status when the run itself failed (config, session, output).
const EXIT_ERROR: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match dispatch(cli.command) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:?}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Run a subcommand.
fn dispatch(command: Command) -> anyhow::Result<ExitCode> {
    match command {
        Command::List => {
            logging::init_cli("info");
            handle_list();
            Ok(ExitCode::SUCCESS)
        }
        Command::Run {
            session,
            validators,
            format,
            config,
            sort_events,
        } => handle_run(&session, &validators, format, config.as_deref(), sort_events),
    }
}

/// Print every validator with its description.
fn handle_list() {
    for validator in validators::all() {
        println!("{:<40} {}", validator.name(), validator.description());
    }
}

/// Evaluate the selected validators and print their verdicts.
fn handle_run(
    session_path: &Path,
    requested: &[String],
    format: Option<OutputFormat>,
    config_flag: Option<&Path>,
    sort_events: bool,
) -> anyhow::Result<ExitCode> {
    let source = config::resolve_config_path(config_flag, |key| std::env::var(key).ok())?;
    let config = config::load_from(&source)?;

    let _logging_guard = match &config.logging.dir {
        Some(dir) => Some(logging::init_with_file(dir, &config.logging.level)?),
        None => {
            logging::init_cli(&config.logging.level);
            None
        }
    };

    let selected = select(&config, requested)?;

    let mut session = Session::load(session_path)
        .with_context(|| format!("failed to load session {}", session_path.display()))?;
    if sort_events {
        session = session.newest_first();
    }

    info!(
        session = %session_path.display(),
        validators = selected.len(),
        "running validators"
    );
    let report = Report::run(&selected, &session, &config.settings);

    match format.unwrap_or(config.output.format) {
        OutputFormat::Text => print!("{report}"),
        OutputFormat::Json => println!("{}", report.to_json().context("failed to encode verdicts")?),
    }

    if report.has_failures() {
        Ok(ExitCode::from(EXIT_NOT_MATCHED))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

/// Validators named on the command line, or the configured selection.
fn select(config: &ValidatorsConfig, requested: &[String]) -> anyhow::Result<Vec<Box<dyn Validator>>> {
    if requested.is_empty() {
        return Ok(validators::all()
            .into_iter()
            .filter(|v| config.is_selected(v.name()))
            .collect());
    }

    requested
        .iter()
        .map(|name| {
            validators::find(name).with_context(|| {
                format!(
                    "unknown validator '{name}' (known: {})",
                    validators::names().join(", ")
                )
            })
        })
        .collect()
}
