//! Main CLI application structure

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use super::config::{Settings, DEFAULT_LOG_FILTER};
use super::output::Output;
use super::tree;
use crate::source::TaskwarriorSource;

#[derive(Parser)]
#[command(name = "twe")]
#[command(author, version, about = "Companion CLI for taskwarrior")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Display pending tasks in a dependency tree
    Tree {
        /// Taskwarrior filter tokens, passed through unchanged
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, num_args = 0..)]
        filters: Vec<String>,
    },
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::from_env();
    init_tracing(&settings.log_filter);
    debug!(?settings, "taskwarrior-enhanced starting");

    match cli.command {
        Commands::Tree { filters } => {
            let source = TaskwarriorSource::new(settings.task_program.as_str());
            let output = Output::detect(settings.color);
            tree::run(&source, &filters, &output)?
        }
    }

    debug!("Command completed successfully");
    Ok(())
}

/// Installs the stderr log subscriber. An unparsable filter falls back to
/// the default rather than failing the run.
fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
