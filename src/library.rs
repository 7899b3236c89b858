//! # Libraries and Fragments
//!
//! A source folder holds one subfolder per library. Every file directly inside
//! a library folder whose extension matches [`Options::file_extension`] is a
//! fragment of that library, named after the file without its extension.
//!
//! ```text
//! scripts/            <- source folder
//!   lib_a/            <- library "lib_a"
//!     base.js         <- fragment "base"
//!     main.js         <- fragment "main"
//!   lib_b/
//!     widget.js
//! ```
//!
//! Files in the source folder itself, files with another extension and files
//! in deeper subfolders are not fragments. Fragments within a library are kept
//! sorted by name so lookups are a binary search.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use log::{debug, trace};
use walkdir::WalkDir;

use crate::annotations;
use crate::config::Options;
use crate::error::{Error, Result};

/// One source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    /// File name without the extension; unique within its library.
    pub name: String,
    /// Raw file content, emitted verbatim.
    pub body: String,
    /// Same-library items that must be emitted before this one.
    pub depends_on: Vec<String>,
    /// Items (`name` or `library:name`) that must exist; no ordering effect.
    pub refers_to: Vec<String>,
}

impl Fragment {
    /// Build a fragment, extracting its annotations from `body`.
    pub fn new(name: impl Into<String>, body: impl Into<String>) -> Self {
        let body = body.into();
        let annotations = annotations::extract(&body);
        Self {
            name: name.into(),
            body,
            depends_on: annotations.depends_on,
            refers_to: annotations.refers_to,
        }
    }
}

/// The fragments of one folder, sorted by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Library {
    name: String,
    fragments: Vec<Fragment>,
}

impl Library {
    /// Create an empty library.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fragments: Vec::new(),
        }
    }

    /// Build a library from fragments in any order.
    pub fn from_fragments<I>(name: impl Into<String>, fragments: I) -> Result<Self>
    where
        I: IntoIterator<Item = Fragment>,
    {
        let mut library = Self::new(name);
        for fragment in fragments {
            library.insert(fragment)?;
        }
        Ok(library)
    }

    /// Insert a fragment at its sorted position.
    ///
    /// Fails with [`Error::DuplicateFragment`] if the name is already taken.
    pub fn insert(&mut self, fragment: Fragment) -> Result<()> {
        match self.position(&fragment.name) {
            Ok(_) => Err(Error::DuplicateFragment {
                name: fragment.name,
                library: self.name.clone(),
            }),
            Err(at) => {
                self.fragments.insert(at, fragment);
                Ok(())
            }
        }
    }

    /// Index of the fragment called `name`, if any.
    pub fn find(&self, name: &str) -> Option<usize> {
        self.position(name).ok()
    }

    fn position(&self, name: &str) -> std::result::Result<usize, usize> {
        self.fragments
            .binary_search_by(|fragment| fragment.name.as_str().cmp(name))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fragments in name order.
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}

/// Every library of one source folder, keyed by library name.
pub type LibrarySet = BTreeMap<String, Library>;

/// Load every library under `source`.
///
/// Fails with [`Error::BadSourcePath`] if `source` is not a directory.
pub fn load(source: &Path, options: &Options) -> Result<LibrarySet> {
    if !source.is_dir() {
        return Err(Error::BadSourcePath {
            path: source.to_path_buf(),
        });
    }

    let mut libraries = LibrarySet::new();

    // Symlinked fragments and library folders count as what they point to.
    let walker = WalkDir::new(source)
        .follow_links(true)
        .min_depth(2)
        .max_depth(2)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let Some(file_name) = entry.file_name().to_str() else {
            trace!("Skipping non UTF-8 file name {:?}", entry.path());
            continue;
        };
        let Some(item_name) = fragment_name(file_name, &options.file_extension) else {
            continue;
        };
        let Some(library_name) = library_name(entry.path()) else {
            continue;
        };

        let body = fs::read_to_string(entry.path()).map_err(|e| Error::io(entry.path(), e))?;

        libraries
            .entry(library_name.to_string())
            .or_insert_with(|| Library::new(library_name))
            .insert(Fragment::new(item_name, body))?;
    }

    for library in libraries.values() {
        debug!(
            "Loaded library '{}' with {} item(s)",
            library.name(),
            library.len()
        );
    }

    Ok(libraries)
}

/// The item name for `file_name`, or `None` if its extension does not match.
///
/// The extension starts at the last `.`; a leading `.` (a dotfile) does not
/// count, so `.js` alone is never a fragment.
pub fn fragment_name<'a>(file_name: &'a str, extension: &str) -> Option<&'a str> {
    let dot = file_name.rfind('.').filter(|&index| index > 0)?;
    let (stem, ext) = file_name.split_at(dot);
    (ext == extension).then_some(stem)
}

fn library_name(path: &Path) -> Option<&str> {
    path.parent()?.file_name()?.to_str()
}
