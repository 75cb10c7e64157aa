//! Output composition
//!
//! Turns parsed buckets plus a target registry into the final per-target
//! texts. Composition is a pure function: it reads only the shared bucket
//! and the one target's bucket, so targets can be composed in any order
//! with identical results.

use std::collections::BTreeMap;

use crate::directive::Buckets;
use crate::registry::TargetRegistry;

/// Compose the final text for every target in the registry.
///
/// Targets that never appeared in an open directive still get an entry,
/// composed from the shared bucket alone. Targets that appear in the
/// document but not in the registry get none.
pub fn compose(buckets: &Buckets, registry: &TargetRegistry) -> BTreeMap<String, String> {
    registry
        .iter()
        .map(|(name, _dest)| (name.to_string(), compose_target(buckets, name)))
        .collect()
}

/// Compose the final text for a single target.
///
/// Shared lines first, then the target's own lines, joined with a single
/// newline. Trailing whitespace is stripped from the joined result and
/// exactly one trailing newline is appended.
pub fn compose_target(buckets: &Buckets, target: &str) -> String {
    let mut lines: Vec<&str> = buckets.shared().iter().map(String::as_str).collect();
    lines.extend(buckets.target(target).iter().map(String::as_str));

    let mut text = lines.join("\n").trim_end().to_string();
    text.push('\n');
    text
}
