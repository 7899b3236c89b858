//! # piecemeal
//!
//! This library concatenates folders of script fragments into one file per
//! folder, ordering the fragments so that each one comes after the fragments
//! it depends on. It backs the `piecemeal` command-line tool.
//!
//! ## Quick Example
//!
//! ```
//! use piecemeal::library::{Fragment, Library, LibrarySet};
//! use piecemeal::{graph, sort};
//!
//! let lib_a = Library::from_fragments(
//!     "lib_a",
//!     [
//!         Fragment::new("main", "/**\n * @depends helper\n */\n"),
//!         Fragment::new("helper", "/**\n * @depends base\n */\n"),
//!         Fragment::new("base", ""),
//!     ],
//! )
//! .unwrap();
//! let libraries = LibrarySet::from([("lib_a".to_string(), lib_a)]);
//!
//! let graphs = graph::build(&libraries).unwrap();
//! let sorted = sort::sorted_fragments(&graphs["lib_a"]).unwrap();
//! let names: Vec<&str> = sorted.iter().map(|f| f.name.as_str()).collect();
//! assert_eq!(names, ["base", "helper", "main"]);
//! ```
//!
//! ## Core Concepts
//!
//! - **Fragments and libraries (`library`)**: every file directly inside a
//!   subfolder of a source folder is a fragment; the subfolder is its library.
//! - **Annotations (`annotations`)**: ` * @depends name` orders fragments
//!   within a library; ` * @references [library:]name` only requires that the
//!   target exists.
//! - **Graph (`graph`)**: resolves both kinds of annotation and records the
//!   reverse dependency edges.
//! - **Sorting (`sort`)**: depth-first topological order with cycle detection.
//! - **Emitting (`emit`)**: writes `<library><extension>` files.
//! - **Pipeline (`pipeline`)**: runs the steps above for each source folder.
//! - **Configuration (`config`)**: options and named build targets.
//!
//! Every error is fatal: the first unresolved name, cycle or bad path stops the
//! build.

pub mod annotations;
pub mod config;
pub mod emit;
pub mod error;
pub mod exit_codes;
pub mod graph;
pub mod library;
pub mod pipeline;
pub mod sort;

#[cfg(test)]
mod sort_proptest;
