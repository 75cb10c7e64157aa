//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};

use rules_sync::output::OutputConfig;

use crate::commands;

/// Rules Sync - Keep per-tool rule files in sync with one canonical document
#[derive(Parser, Debug)]
#[command(name = "rules-sync")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write every target's rule file from the canonical rules document
    Sync(commands::sync::SyncArgs),

    /// Verify that the rule files on disk are up to date
    Check(commands::check::CheckArgs),

    /// List the configured targets and their destinations
    Targets(commands::targets::TargetsArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level);
        let output = OutputConfig::from_env_and_flag(&self.color);

        match self.command {
            Commands::Sync(args) => commands::sync::execute(args, &output),
            Commands::Check(args) => commands::check::execute(args, &output),
            Commands::Targets(args) => commands::targets::execute(args),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }
}

/// Initialize `env_logger` from the `--log-level` flag.
///
/// An explicit `RUST_LOG` environment variable takes precedence over the
/// flag. Repeated initialization (as happens in tests) is ignored.
fn init_logging(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level.to_string());
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}
