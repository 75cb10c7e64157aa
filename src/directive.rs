//! Directive parsing and line bucketing
//!
//! This module implements the single-pass scan that partitions a rules
//! document into a shared section and per-target sections.
//!
//! ## Directive syntax
//!
//! ```text
//! Everything out here is shared across all targets.
//! ::only cursor,codex
//! These lines apply to the cursor and codex targets only.
//! ::end
//! Back to shared content.
//! ```
//!
//! An open directive replaces the active scope wholesale; it does not nest
//! or stack. A close directive always returns to the shared scope, and is a
//! no-op when the scan is already there. Matching is on a fixed prefix at
//! the start of the line, so a line that merely mentions `::only` elsewhere
//! is ordinary content.

use std::collections::{BTreeMap, BTreeSet};

use log::debug;

use crate::error::{Error, Result};

/// Literal prefix of an open directive. The remainder of the line is a
/// comma-separated list of target identifiers.
pub const OPEN_PREFIX: &str = "::only ";

/// Literal prefix of a close directive. Any trailing text on the line is
/// ignored.
pub const CLOSE_PREFIX: &str = "::end";

/// The set of identifiers content lines are currently assigned to.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Scope {
    /// Outside any directive pair; lines belong to every target.
    Shared,
    /// Inside a `::only` region; lines belong to the named targets only.
    Only(BTreeSet<String>),
}

/// Ordered line sequences accumulated per identifier during parsing.
///
/// The shared bucket always exists. A target bucket exists exactly when the
/// target has appeared in at least one open directive, even if no lines were
/// ever assigned to it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Buckets {
    shared: Vec<String>,
    targets: BTreeMap<String, Vec<String>>,
}

impl Buckets {
    /// Lines outside any scoped region, included in every output.
    pub fn shared(&self) -> &[String] {
        &self.shared
    }

    /// Lines scoped to `target`. Empty if the target never appeared in an
    /// open directive.
    pub fn target(&self, target: &str) -> &[String] {
        self.targets.get(target).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Targets that appeared in at least one open directive, in name order.
    pub fn mentioned_targets(&self) -> impl Iterator<Item = &str> {
        self.targets.keys().map(String::as_str)
    }

    /// Create the bucket for `target` if it does not exist yet.
    fn ensure_target(&mut self, target: &str) {
        if !self.targets.contains_key(target) {
            self.targets.insert(target.to_string(), Vec::new());
        }
    }

    /// Append a content line to every bucket in the active scope.
    fn push(&mut self, scope: &Scope, line: &str) {
        match scope {
            Scope::Shared => self.shared.push(line.to_string()),
            Scope::Only(targets) => {
                for target in targets {
                    self.targets
                        .get_mut(target)
                        .expect("bucket created when scope opened")
                        .push(line.to_string());
                }
            }
        }
    }
}

/// Extract the identifier set from the remainder of an open directive line.
///
/// Identifiers are split on commas and trimmed; pieces that are empty after
/// trimming are dropped. Duplicates collapse, so a line is never assigned to
/// the same bucket twice by one directive.
fn parse_open_targets(rest: &str) -> BTreeSet<String> {
    rest.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse a rules document into per-identifier line buckets.
///
/// Scans the lines once, in order. Directive lines switch the active scope;
/// every other line, blank lines included, is appended verbatim to the
/// bucket of each identifier currently in scope.
///
/// # Errors
///
/// Returns [`Error::MalformedDirective`] for an open directive whose
/// identifier list is empty after trimming, referencing the literal line.
/// Parsing does not attempt to recover or skip past it.
pub fn parse_document<'a, I>(lines: I) -> Result<Buckets>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut buckets = Buckets::default();
    let mut scope = Scope::Shared;

    for line in lines {
        if let Some(rest) = line.strip_prefix(OPEN_PREFIX) {
            let targets = parse_open_targets(rest);
            if targets.is_empty() {
                return Err(Error::MalformedDirective {
                    line: line.to_string(),
                });
            }
            for target in &targets {
                buckets.ensure_target(target);
            }
            debug!("scope opened for {:?}", targets);
            scope = Scope::Only(targets);
        } else if line.starts_with(CLOSE_PREFIX) {
            if scope == Scope::Shared {
                debug!("close directive outside a scoped region, ignoring");
            }
            scope = Scope::Shared;
        } else {
            buckets.push(&scope, line);
        }
    }

    Ok(buckets)
}
