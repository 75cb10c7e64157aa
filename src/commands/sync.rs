//! Sync command implementation
//!
//! The sync command runs the whole pipeline:
//! 1. Resolve the target registry (defaults plus --map overrides)
//! 2. Read and parse the canonical rules document into buckets
//! 3. Compose one output per registered target
//! 4. Write every destination, or print previews in dry-run mode
//!
//! Composition happens entirely before the first write, so a malformed
//! directive aborts with the filesystem untouched.

use anyhow::Result;
use clap::Args;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use rules_sync::compose;
use rules_sync::defaults::DEFAULT_BASE_FILENAME;
use rules_sync::directive;
use rules_sync::output::{emoji, OutputConfig};
use rules_sync::registry::TargetRegistry;

/// Arguments for the sync command
#[derive(Args, Debug)]
pub struct SyncArgs {
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

    /// Print would-be outputs instead of writing them
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Show per-target detail while writing
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// Execute the sync command
pub fn execute(args: SyncArgs, output: &OutputConfig) -> Result<()> {
    let start_time = Instant::now();

    if !args.base.exists() {
        anyhow::bail!("Rules document not found: {}", args.base.display());
    }

    let mut registry = TargetRegistry::with_defaults();
    registry.apply_mappings(&args.map)?;

    debug!(
        "syncing {} targets from {}",
        registry.len(),
        args.base.display()
    );

    let document = fs::read_to_string(&args.base)?;
    let buckets = directive::parse_document(document.lines())?;
    let outputs = compose::compose(&buckets, &registry);

    if args.dry_run {
        for (target, dest) in registry.iter() {
            let content = &outputs[target];
            println!("----- {} (target={}) -----\n{}", dest.display(), target, content);
        }
        return Ok(());
    }

    for (target, dest) in registry.iter() {
        let content = &outputs[target];
        write_target(dest, content)?;

        if !args.quiet {
            if args.verbose {
                println!(
                    "{} Wrote {} ({} lines)",
                    emoji(output, "📝", "[WRITE]"),
                    dest.display(),
                    content.lines().count()
                );
            } else {
                println!("Wrote {}", dest.display());
            }
        }
    }

    if !args.quiet {
        let duration = start_time.elapsed();
        println!(
            "{} Synced {} targets in {:.2}s",
            emoji(output, "✅", "[OK]"),
            registry.len(),
            duration.as_secs_f64()
        );
    }

    Ok(())
}

/// Write one composed output, creating parent directories as needed.
fn write_target(dest: &Path, content: &str) -> Result<()> {
    if let Some(parent) = dest.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(dest, content)?;
    Ok(())
}
