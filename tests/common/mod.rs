//! Shared test utilities for integration and E2E tests.
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
//!     let fixture = TestFixture::new().with_fragment("lib_a", "base", "var a;\n");
//!     fixture.command().args(["build", "--src", "src", "--dest", "out"]).assert().success();
//! }
//! ```

use assert_fs::prelude::*;
use std::path::{Path, PathBuf};

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use assert_fs::TempDir;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::{configs, testdata};
    pub use super::TestFixture;
}

/// Configuration snippets for testing.
#[allow(dead_code)]
pub mod configs {
    /// Two targets over `src/`: the defaults and one without the prologue.
    pub const TWO_TARGETS: &str = r#"
targets:
  default_options:
    src: [src/]
    dest: out/default/
  custom_options:
    options:
      use_strict: false
    src: [src/]
    dest: out/custom/
"#;

    /// Invalid YAML for error testing.
    pub const INVALID_YAML: &str = "targets: [unclosed";
}

/// Path of a fixture folder under `tests/testdata`.
#[allow(dead_code)]
pub fn testdata(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("testdata")
        .join(name)
}

/// A temporary working directory with a `src/` fragment tree and an
/// optional `piecemeal.yaml`.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

#[allow(dead_code)]
impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Add a `piecemeal.yaml` configuration file with the given content.
    pub fn with_config(self, content: &str) -> Self {
        self.temp_dir
            .child("piecemeal.yaml")
            .write_str(content)
            .expect("Failed to write config file");
        self
    }

    /// Add `src/<library>/<name>.js` with the given content.
    pub fn with_fragment(self, library: &str, name: &str, content: &str) -> Self {
        self.with_file(&format!("src/{}/{}.js", library, name), content)
    }

    /// Copy a fixture tree from `tests/testdata/<name>` to `src/`.
    pub fn with_testdata(self, name: &str) -> Self {
        self.temp_dir
            .child("src")
            .copy_from(testdata(name), &["**/*"])
            .expect("Failed to copy fixture tree");
        self
    }

    /// Add a file with the given path and content.
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

    /// Create a child path in the temp directory.
    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child(path)
    }

    /// Read a file relative to the fixture root.
    pub fn read(&self, path: &str) -> String {
        std::fs::read_to_string(self.path().join(path))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", path, e))
    }

    /// Create a command configured to run in this fixture's directory.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("piecemeal");
        cmd.current_dir(self.path());
        cmd.env_remove("PIECEMEAL_CONFIG");
        cmd.env_remove("RUST_LOG");
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
