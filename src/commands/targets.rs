//! Targets command implementation
//!
//! Lists the effective target registry: the built-in defaults with any
//! `--map` overrides applied. A safe, read-only operation.

use anyhow::Result;
use clap::Args;

use rules_sync::registry::TargetRegistry;

/// Arguments for the targets command
#[derive(Args, Debug)]
pub struct TargetsArgs {
    /// Map a target to a destination (TARGET:PATH). Repeat to add/override.
    #[arg(short, long, value_name = "TARGET:PATH")]
    pub map: Vec<String>,

    /// Show only the total count of targets
    #[arg(long)]
    pub count: bool,
}

/// Execute the targets command
pub fn execute(args: TargetsArgs) -> Result<()> {
    let mut registry = TargetRegistry::with_defaults();
    registry.apply_mappings(&args.map)?;

    if args.count {
        println!("{}", registry.len());
        return Ok(());
    }

    for (name, dest) in registry.iter() {
        println!("{:<12} {}", name, dest.display());
    }

    Ok(())
}
