//! # CLI Command Implementations
//!
//! Each subcommand of the `piecemeal` tool lives in its own file with an
//! `Args` struct (derived using `clap`) and an `execute` function that calls
//! into the `piecemeal` library. Arguments shared by `build` and `check` live
//! in [`targets`].

pub mod build;
pub mod check;
pub mod completions;
pub mod targets;
