//! Writing sorted libraries to the destination folder.
//!
//! Each library becomes one file, `<library><file_extension>`, holding the
//! bodies of its items in sorted order with nothing injected between them.
//! With `use_strict` enabled the file starts with [`STRICT_PROLOGUE`].

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::config::Options;
use crate::error::{Error, Result};
use crate::library::Fragment;

/// Strict-mode directive followed by a blank line.
pub const STRICT_PROLOGUE: &str = "\"use strict\";\n\n";

/// Concatenate `fragments` into the content of one library file.
pub fn render(fragments: &[&Fragment], options: &Options) -> String {
    let prologue = if options.use_strict {
        STRICT_PROLOGUE
    } else {
        ""
    };
    let capacity = prologue.len() + fragments.iter().map(|f| f.body.len()).sum::<usize>();

    let mut content = String::with_capacity(capacity);
    content.push_str(prologue);
    for fragment in fragments {
        content.push_str(&fragment.body);
    }
    content
}

/// Path of the output file for `library` under `dest`.
pub fn output_path(dest: &Path, library: &str, options: &Options) -> PathBuf {
    dest.join(format!("{}{}", library, options.file_extension))
}

/// Create `dest` if it is missing and check that it is a directory.
pub fn prepare_destination(dest: &Path) -> Result<()> {
    if !dest.exists() {
        fs::create_dir_all(dest).map_err(|e| Error::io(dest, e))?;
    }

    if !dest.is_dir() {
        return Err(Error::BadDestinationPath {
            path: dest.to_path_buf(),
        });
    }

    Ok(())
}

/// Render and write one library file, returning its path.
///
/// `dest` must already have been checked with [`prepare_destination`].
pub fn write_library(
    dest: &Path,
    library: &str,
    fragments: &[&Fragment],
    options: &Options,
) -> Result<PathBuf> {
    let path = output_path(dest, library, options);
    fs::write(&path, render(fragments, options)).map_err(|e| Error::io(&path, e))?;
    debug!("File '{}' created.", path.display());
    Ok(path)
}
