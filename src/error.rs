//! # Error Handling
//!
//! This module defines the centralized error type for `piecemeal`. Every
//! failure in the library is fatal for the run: the first error raised by the
//! loader, graph builder, sorter or emitter aborts the whole build, and the
//! binary turns it into a single message and a distinguished exit status.
//!
//! ## Key Components
//!
//! - **`Error`**: One variant per failure mode. The build variants carry the
//!   library and item names so the message identifies exactly what to fix.
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`.
//! - **`Error::exit_code`**: Maps each variant to a code from
//!   [`crate::exit_codes`].

use std::path::PathBuf;

use thiserror::Error;

use crate::exit_codes;

/// Main error type for piecemeal operations
#[derive(Error, Debug)]
pub enum Error {
    /// The configured source is not a directory.
    #[error("Expected a folder for source but found '{}' instead.", path.display())]
    BadSourcePath { path: PathBuf },

    /// The configured destination exists but is not a directory.
    #[error("Expected a folder for destination but found '{}' instead.", path.display())]
    BadDestinationPath { path: PathBuf },

    /// An item declares a dependency with no matching item in its library.
    #[error("Unresolved dependency '{dependency}' for item '{item}' in library '{library}'.")]
    UnresolvedDependency {
        dependency: String,
        item: String,
        library: String,
    },

    /// An item declares a reference with no matching item in the target library.
    #[error(
        "Unresolved reference to item '{target}' in library '{target_library}' for item '{item}' in library '{library}'."
    )]
    UnresolvedReference {
        target: String,
        target_library: String,
        item: String,
        library: String,
    },

    /// The dependencies inside one library form a cycle.
    #[error("Cyclic dependency detected when evaluating item '{item}' in library '{library}'.")]
    CyclicDependency { item: String, library: String },

    /// Two files in one folder map to the same item name.
    #[error("Duplicate item '{name}' in library '{library}'.")]
    DuplicateFragment { name: String, library: String },

    /// The configuration file or an option value is invalid.
    #[error("Configuration error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    ConfigParse {
        message: String,
        /// Optional hint for how to fix the configuration issue
        hint: Option<String>,
    },

    /// A target was requested that the configuration does not define.
    #[error("Unknown target '{name}' (available: {available})")]
    UnknownTarget { name: String, available: String },

    /// An I/O error on a specific path.
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An error while walking a source folder.
    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// A YAML parsing error, wrapped from `serde_yaml::Error`.
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl Error {
    /// Wraps an `std::io::Error` with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// The process exit status this error should produce.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::BadSourcePath { .. } | Error::BadDestinationPath { .. } => {
                exit_codes::BAD_PATH
            }
            Error::ConfigParse { .. } | Error::UnknownTarget { .. } | Error::Yaml(_) => {
                exit_codes::CONFIG_ERROR
            }
            Error::UnresolvedDependency { .. }
            | Error::UnresolvedReference { .. }
            | Error::CyclicDependency { .. }
            | Error::DuplicateFragment { .. }
            | Error::Io { .. }
            | Error::Walk(_) => exit_codes::FATAL_ERROR,
        }
    }
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
