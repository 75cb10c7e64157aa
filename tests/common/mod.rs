//! Shared test utilities for E2E tests.
//!
//! This module provides common fixtures and sample documents to reduce
//! duplication across test files.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_minimal_base();
//!     fixture.command().arg("sync").assert().success();
//! }
//! ```

use assert_fs::prelude::*;
use std::path::Path;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_fs::prelude::*;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::documents;
    pub use super::TestFixture;
}

/// Common rules-document snippets for testing.
#[allow(dead_code)]
pub mod documents {
    /// Shared-only document without any directives.
    pub const SHARED_ONLY: &str = "# Rules\n\nAlways be precise.\n";

    /// Document with one region scoped to the cursor target.
    pub const WITH_CURSOR_REGION: &str = "\
Shared rule
::only cursor
Cursor-only rule
::end
Final shared rule
";

    /// Document with a region scoped to two targets at once.
    pub const WITH_MULTI_TARGET_REGION: &str = "\
::only cursor,codex
Applies to cursor and codex
::end
Applies to everyone
";

    /// Document whose open directive names no targets.
    pub const MALFORMED: &str = "Shared rule\n::only   ,  ,\nOrphaned line\n";
}

/// A test fixture that provides a temporary directory with an optional
/// canonical rules document.
///
/// # Example
///
/// ```rust,ignore
/// let fixture = TestFixture::new()
///     .with_base(documents::WITH_CURSOR_REGION);
///
/// fixture.command().arg("sync").assert().success();
/// ```
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Add an `agentic_rules.md` document with the given content.
    #[allow(dead_code)]
    pub fn with_base(self, content: &str) -> Self {
        self.temp_dir
            .child("agentic_rules.md")
            .write_str(content)
            .expect("Failed to write rules document");
        self
    }

    /// Add the minimal shared-only rules document.
    #[allow(dead_code)]
    pub fn with_minimal_base(self) -> Self {
        self.with_base(documents::SHARED_ONLY)
    }

    /// Add a file with the given path and content.
    #[allow(dead_code)]
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Get the path to the rules document.
    #[allow(dead_code)]
    pub fn base_path(&self) -> std::path::PathBuf {
        self.temp_dir.path().join("agentic_rules.md")
    }

    /// Create a child path in the temp directory.
    #[allow(dead_code)]
    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child(path)
    }

    /// Create a command configured to run in this fixture's directory.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("rules-sync");
        cmd.current_dir(self.path());
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_creates_temp_dir() {
        let fixture = TestFixture::new();
        assert!(fixture.path().exists());
    }

    #[test]
    fn test_fixture_with_base() {
        let fixture = TestFixture::new().with_minimal_base();
        assert!(fixture.base_path().exists());
    }

    #[test]
    fn test_fixture_with_file() {
        let fixture = TestFixture::new().with_file("test.txt", "hello");
        assert!(fixture.path().join("test.txt").exists());
    }
}
