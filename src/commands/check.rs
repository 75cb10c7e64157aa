//! Check command implementation
//!
//! This module implements the `check` subcommand, which detects when the
//! per-tool rule files on disk have drifted from what `sync` would generate.
//!
//! ## Functionality
//!
//! - **Drift Detection**: Recomposes every target's output and compares it
//!   byte-for-byte with the destination file.
//! - **Exit Codes**: 0 when every destination is up to date, nonzero when
//!   any destination is stale or missing.
//!
//! This command is a safe, read-only operation that does not modify any
//! files. It is designed for use in pre-commit hooks and CI to keep the
//! generated rule files honest.

use anyhow::Result;
use clap::Args;
use log::debug;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use rules_sync::compose;
use rules_sync::defaults::DEFAULT_BASE_FILENAME;
use rules_sync::directive;
use rules_sync::output::{emoji, OutputConfig};
use rules_sync::registry::TargetRegistry;

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Path to the canonical rules document
    #[arg(
        short,
        long,
        value_name = "PATH",
        env = "RULES_SYNC_BASE",
        default_value = DEFAULT_BASE_FILENAME
    )]
    pub base: PathBuf,

    /// Map a target to a destination (TARGET:PATH). Repeat to add/override.
    #[arg(short, long, value_name = "TARGET:PATH")]
    pub map: Vec<String>,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// How one destination compares against its freshly composed output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TargetState {
    UpToDate,
    Stale,
    Missing,
}

/// Execute the check command
pub fn execute(args: CheckArgs, output: &OutputConfig) -> Result<()> {
    if !args.base.exists() {
        anyhow::bail!("Rules document not found: {}", args.base.display());
    }

    let mut registry = TargetRegistry::with_defaults();
    registry.apply_mappings(&args.map)?;

    let document = fs::read_to_string(&args.base)?;
    let buckets = directive::parse_document(document.lines())?;
    let outputs = compose::compose(&buckets, &registry);

    let mut drifted = 0usize;
    for (target, dest) in registry.iter() {
        let state = compare_destination(dest, &outputs[target])?;
        debug!("{}: {:?}", target, state);

        if state != TargetState::UpToDate {
            drifted += 1;
        }

        if !args.quiet {
            match state {
                TargetState::UpToDate => println!(
                    "{} {} up to date",
                    emoji(output, "✅", "[OK]"),
                    dest.display()
                ),
                TargetState::Stale => println!(
                    "{} {} stale",
                    emoji(output, "🔄", "[STALE]"),
                    dest.display()
                ),
                TargetState::Missing => println!(
                    "{} {} missing",
                    emoji(output, "❌", "[MISSING]"),
                    dest.display()
                ),
            }
        }
    }

    if drifted > 0 {
        anyhow::bail!(
            "{} of {} rule files are out of date (run 'rules-sync sync')",
            drifted,
            registry.len()
        );
    }

    Ok(())
}

/// Compare one destination file with its expected content.
///
/// A missing file is a drift state, not an error; any other read failure
/// (e.g. permission denied) propagates.
fn compare_destination(dest: &Path, expected: &str) -> Result<TargetState> {
    match fs::read_to_string(dest) {
        Ok(existing) if existing == expected => Ok(TargetState::UpToDate),
        Ok(_) => Ok(TargetState::Stale),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(TargetState::Missing),
        Err(e) => Err(e.into()),
    }
}
