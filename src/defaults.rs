//! Default values for rules-sync.
//!
//! This module provides centralized default values used across commands,
//! ensuring consistency and avoiding duplication.

/// Default canonical rules document, resolved against the working directory.
///
/// Can be overridden with the `-b/--base` CLI flag or the `RULES_SYNC_BASE`
/// environment variable.
pub const DEFAULT_BASE_FILENAME: &str = "agentic_rules.md";

/// Built-in target table: tool name and its conventional rule file.
///
/// Extended or overridden per-invocation with `--map TARGET:PATH`.
pub fn default_targets() -> [(&'static str, &'static str); 3] {
    [
        ("windsurf", ".windsurfrules"),
        ("codex", "AGENTS.md"),
        ("cursor", ".cursorrules.mdc"),
    ]
}
