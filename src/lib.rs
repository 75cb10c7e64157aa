//! # Rules Sync Library
//!
//! This library provides the core functionality for synchronizing a single
//! canonical rules document into per-tool rule files. It is designed to be
//! used by the `rules-sync` command-line tool but can also be embedded in
//! other applications that need to fan one annotated document out to several
//! consumers.
//!
//! ## Quick Example
//!
//! ```
//! use rules_sync::registry::TargetRegistry;
//! use rules_sync::{compose, directive};
//!
//! let document = "Shared rule\n::only cursor\nCursor-only rule\n::end\nMore shared\n";
//!
//! // Bucket the document's lines by target
//! let buckets = directive::parse_document(document.lines()).unwrap();
//!
//! // Declare where each target's output goes
//! let mut registry = TargetRegistry::new();
//! registry.insert("cursor", ".cursorrules.mdc");
//! registry.insert("codex", "AGENTS.md");
//!
//! // Compose the final per-target texts
//! let outputs = compose::compose(&buckets, &registry);
//! assert_eq!(outputs["cursor"], "Shared rule\nCursor-only rule\nMore shared\n");
//! assert_eq!(outputs["codex"], "Shared rule\nMore shared\n");
//! ```
//!
//! ## Core Concepts
//!
//! - **Directives (`directive`)**: In-document marker lines. A `::only a,b`
//!   line starts a region that applies to targets `a` and `b` only; a
//!   `::end` line returns to the shared region. Everything else is content.
//! - **Buckets (`directive::Buckets`)**: The ordered line sequences
//!   accumulated per identifier while scanning the document once.
//! - **Target registry (`registry`)**: Which targets exist and which
//!   destination file each one maps to, built from defaults plus overrides.
//! - **Composition (`compose`)**: The pure step that turns buckets plus a
//!   registry into final text, one output per registered target.
//!
//! Parsing runs once per document; composition runs once per target, and no
//! target's composition reads another target's bucket. Everything in this
//! crate operates on in-memory values — reading the source document and
//! persisting outputs belong to the binary's command layer.

pub mod compose;
pub mod defaults;
pub mod directive;
pub mod error;
pub mod output;
pub mod registry;

#[cfg(test)]
mod compose_proptest;
