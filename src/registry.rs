//! Target registry
//!
//! Tracks which targets exist and which destination file each one maps to.
//! A registry starts from the built-in defaults (see [`crate::defaults`])
//! and is then adjusted with `--map TARGET:PATH` specs, where later specs
//! win over earlier ones and over the defaults.
//!
//! The registry never inspects destinations beyond `~/` expansion; whether
//! a path is writable is the command layer's concern.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::defaults;
use crate::error::{Error, Result};

/// Ordered mapping from target name to destination path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetRegistry {
    entries: BTreeMap<String, PathBuf>,
}

impl TargetRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the built-in target table.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for (name, dest) in defaults::default_targets() {
            registry.insert(name, dest);
        }
        registry
    }

    /// Add a target, replacing any existing destination for the same name.
    pub fn insert(&mut self, name: impl Into<String>, dest: impl Into<PathBuf>) {
        self.entries.insert(name.into(), dest.into());
    }

    /// Apply `--map TARGET:PATH` specs on top of the current entries.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Mapping`] on the first spec that does not parse;
    /// earlier specs in the slice have already been applied at that point,
    /// so callers should treat the registry as unusable after a failure.
    pub fn apply_mappings<S: AsRef<str>>(&mut self, specs: &[S]) -> Result<()> {
        for spec in specs {
            let (name, dest) = parse_mapping(spec.as_ref())?;
            self.insert(name, dest);
        }
        Ok(())
    }

    /// Destination for `name`, if registered.
    pub fn get(&self, name: &str) -> Option<&Path> {
        self.entries.get(name).map(PathBuf::as_path)
    }

    /// Number of registered targets.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry has no targets.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(name, destination)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.entries
            .iter()
            .map(|(name, dest)| (name.as_str(), dest.as_path()))
    }
}

/// Parse a single `TARGET:PATH` mapping spec.
///
/// The target name is trimmed and must be non-empty. The path is taken as
/// spelled, apart from expanding a leading `~/` to the home directory.
pub fn parse_mapping(spec: &str) -> Result<(String, PathBuf)> {
    let Some((name, dest)) = spec.split_once(':') else {
        return Err(Error::Mapping {
            value: spec.to_string(),
            message: "expected TARGET:PATH".to_string(),
        });
    };

    let name = name.trim();
    if name.is_empty() {
        return Err(Error::Mapping {
            value: spec.to_string(),
            message: "target name is empty".to_string(),
        });
    }

    Ok((name.to_string(), expand_user(dest)))
}

/// Expand a leading `~/` to the user's home directory, when known.
fn expand_user(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}
