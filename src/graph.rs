//! Dependency graph construction and name validation.
//!
//! For every item in every library this resolves its `@depends` names inside
//! the same library and records the reverse edge ("required by"), then checks
//! that each `@references` target exists. References are existence checks
//! only; they never add edges.
//!
//! Edges are stored as indices into [`Library::fragments`], so the library
//! stays the sole owner of its fragments and the graph is just a lookup table.

use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::library::{Library, LibrarySet};

/// Separator between the library and item parts of a reference.
pub const REFERENCE_SEPARATOR: char = ':';

/// One library plus its validated dependency edges.
#[derive(Debug)]
pub struct LibraryGraph<'a> {
    library: &'a Library,
    /// `required_by[i]` lists the items that depend on item `i`, in the order
    /// the dependencies were declared.
    required_by: Vec<Vec<usize>>,
}

impl<'a> LibraryGraph<'a> {
    pub fn library(&self) -> &'a Library {
        self.library
    }

    /// Items that declared item `index` as a dependency.
    pub fn required_by(&self, index: usize) -> &[usize] {
        &self.required_by[index]
    }

    pub fn len(&self) -> usize {
        self.required_by.len()
    }

    pub fn is_empty(&self) -> bool {
        self.required_by.is_empty()
    }
}

/// A parsed `@references` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceSpec<'s> {
    /// Explicit library, or `None` for the referring item's own library.
    pub library: Option<&'s str>,
    pub item: &'s str,
}

impl<'s> ReferenceSpec<'s> {
    /// Split `library:item`; a value without a separator names an item in the
    /// referring library.
    pub fn parse(spec: &'s str) -> Self {
        match spec.split_once(REFERENCE_SEPARATOR) {
            Some((library, item)) => Self {
                library: Some(library),
                item,
            },
            None => Self {
                library: None,
                item: spec,
            },
        }
    }
}

/// Resolve and validate every library in `libraries`.
///
/// Libraries and items are processed in name order, so when several names are
/// unresolved the first one in that order is reported.
pub fn build(libraries: &LibrarySet) -> Result<BTreeMap<&str, LibraryGraph<'_>>> {
    let mut graphs = BTreeMap::new();

    for (name, library) in libraries {
        let required_by = resolve_dependencies(library)?;
        check_references(library, libraries)?;
        graphs.insert(
            name.as_str(),
            LibraryGraph {
                library,
                required_by,
            },
        );
    }

    Ok(graphs)
}

fn resolve_dependencies(library: &Library) -> Result<Vec<Vec<usize>>> {
    let mut required_by = vec![Vec::new(); library.len()];

    for (index, fragment) in library.fragments().iter().enumerate() {
        for dependency in &fragment.depends_on {
            let target = library
                .find(dependency)
                .ok_or_else(|| Error::UnresolvedDependency {
                    dependency: dependency.clone(),
                    item: fragment.name.clone(),
                    library: library.name().to_string(),
                })?;
            required_by[target].push(index);
        }
    }

    Ok(required_by)
}

fn check_references(library: &Library, libraries: &LibrarySet) -> Result<()> {
    for fragment in library.fragments() {
        for reference in &fragment.refers_to {
            let spec = ReferenceSpec::parse(reference);
            let target_library = spec.library.unwrap_or(library.name());

            let found = libraries
                .get(target_library)
                .and_then(|target| target.find(spec.item))
                .is_some();

            if !found {
                return Err(Error::UnresolvedReference {
                    target: spec.item.to_string(),
                    target_library: target_library.to_string(),
                    item: fragment.name.clone(),
                    library: library.name().to_string(),
                });
            }
        }
    }
    Ok(())
}
