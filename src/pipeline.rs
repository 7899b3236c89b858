//! Orchestration of a complete build.
//!
//! Each source folder is processed on its own, start to finish, before the
//! next one begins:
//!
//! 1.  **Load**: read every library under the folder ([`library::load`]).
//! 2.  **Validate**: resolve dependencies and references ([`graph::build`]).
//! 3.  **Sort**: order every library ([`sort::sorted_fragments`]).
//! 4.  **Emit**: write one file per library ([`emit::write_library`]).
//!
//! The first error aborts the whole run. Files written for earlier source
//! folders stay on disk.

use std::path::{Path, PathBuf};

use log::debug;

use crate::config::Options;
use crate::emit;
use crate::error::Result;
use crate::graph;
use crate::library::{self, Fragment};
use crate::sort;

/// Whether sorted libraries are written or only checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Write,
    DryRun,
}

/// The result of one library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryReport {
    pub name: String,
    /// Item names in emitted order.
    pub order: Vec<String>,
    /// Output file, written or (in a dry run) the one that would be written.
    pub output: PathBuf,
}

/// The result of one source folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub source: PathBuf,
    pub dest: PathBuf,
    pub mode: Mode,
    pub libraries: Vec<LibraryReport>,
}

impl BuildReport {
    /// Number of files written; zero for a dry run.
    pub fn files_written(&self) -> usize {
        match self.mode {
            Mode::Write => self.libraries.len(),
            Mode::DryRun => 0,
        }
    }
}

/// Build every source folder into `dest`, in the order given.
pub fn run(
    sources: &[PathBuf],
    dest: &Path,
    options: &Options,
    mode: Mode,
) -> Result<Vec<BuildReport>> {
    sources
        .iter()
        .map(|source| build_source(source, dest, options, mode))
        .collect()
}

/// Load, validate, sort and emit the libraries of one source folder.
pub fn build_source(
    source: &Path,
    dest: &Path,
    options: &Options,
    mode: Mode,
) -> Result<BuildReport> {
    debug!("Loading libraries from '{}'", source.display());
    let libraries = library::load(source, options)?;
    let graphs = graph::build(&libraries)?;

    let mut sorted: Vec<(&str, Vec<&Fragment>)> = Vec::with_capacity(graphs.len());
    for (name, graph) in &graphs {
        let fragments = sort::sorted_fragments(graph)?;
        debug!(
            "Library '{}' ordered as [{}]",
            name,
            fragments
                .iter()
                .map(|f| f.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
        sorted.push((*name, fragments));
    }

    if mode == Mode::Write {
        emit::prepare_destination(dest)?;
    }

    let mut reports = Vec::with_capacity(sorted.len());
    for (name, fragments) in sorted {
        let output = match mode {
            Mode::Write => emit::write_library(dest, name, &fragments, options)?,
            Mode::DryRun => emit::output_path(dest, name, options),
        };
        reports.push(LibraryReport {
            name: name.to_string(),
            order: fragments.iter().map(|f| f.name.clone()).collect(),
            output,
        });
    }

    let report = BuildReport {
        source: source.to_path_buf(),
        dest: dest.to_path_buf(),
        mode,
        libraries: reports,
    };
    if mode == Mode::Write {
        debug!(
            "{} file(s) written to '{}'.",
            report.files_written(),
            dest.display()
        );
    }
    Ok(report)
}
