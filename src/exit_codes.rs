//! Process exit codes used by the `piecemeal` binary.
//!
//! Clap already exits with [`USAGE`] on bad command-line input; the other
//! codes come from [`crate::error::Error::exit_code`].

/// The build completed and every library was written (or checked).
pub const SUCCESS: u8 = 0;

/// Unresolved dependency or reference, dependency cycle, duplicate item, or I/O failure.
pub const FATAL_ERROR: u8 = 1;

/// Invalid command-line usage.
pub const USAGE: u8 = 2;

/// The configuration file, a target name, or an option value is invalid.
pub const CONFIG_ERROR: u8 = 3;

/// The source is not a folder, or the destination exists and is not a folder.
pub const BAD_PATH: u8 = 6;
