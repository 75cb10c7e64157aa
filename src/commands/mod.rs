//! # CLI Command Implementations
//!
//! This module contains the implementation for each subcommand of the
//! `rules-sync` command-line tool. Each subcommand is defined in its own
//! file to keep the logic separated and maintainable.
//!
//! Each command module contains an `Args` struct defining the
//! command-specific options, derived using `clap`, and an `execute` function
//! that takes the parsed `Args` and calls into the `rules_sync` library to
//! perform the core logic.

pub mod check;
pub mod completions;
pub mod sync;
pub mod targets;
