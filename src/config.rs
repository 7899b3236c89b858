//! # Configuration
//!
//! This module defines the options that control a build and the
//! `piecemeal.yaml` file that names build targets.
//!
//! ## Layering
//!
//! Options are resolved in layers, later layers winning:
//!
//! 1.  Built-in defaults (`use_strict: true`, `file_extension: ".js"`).
//! 2.  The file-level `options` block.
//! 3.  The target's own `options` block.
//! 4.  Command-line flags.
//!
//! Each layer is an [`OptionsOverride`] whose unset fields fall through. The
//! result is a plain [`Options`] value that is passed by reference to the
//! loader, the pipeline and the emitter.
//!
//! ## Example
//!
//! ```yaml
//! options:
//!   use_strict: true
//! targets:
//!   default:
//!     src: [scripts/]
//!     dest: build/
//!   loose:
//!     options:
//!       use_strict: false
//!     src: [scripts/]
//!     dest: build/loose/
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILENAME: &str = "piecemeal.yaml";

/// Default fragment and output file extension.
pub const DEFAULT_FILE_EXTENSION: &str = ".js";

/// Resolved options for one build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Prepend `"use strict";` and a blank line to every emitted library.
    pub use_strict: bool,
    /// Extension that selects fragment files and names emitted libraries.
    pub file_extension: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            use_strict: true,
            file_extension: DEFAULT_FILE_EXTENSION.to_string(),
        }
    }
}

impl Options {
    /// Apply one override layer on top of these options.
    pub fn merged(mut self, layer: &OptionsOverride) -> Self {
        if let Some(use_strict) = layer.use_strict {
            self.use_strict = use_strict;
        }
        if let Some(ext) = &layer.file_extension {
            self.file_extension = ext.clone();
        }
        self
    }

    /// Resolve a stack of layers over the defaults.
    pub fn resolve<'a, I>(layers: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a OptionsOverride>,
    {
        let options = layers
            .into_iter()
            .fold(Self::default(), |options, layer| options.merged(layer));
        options.validate()?;
        Ok(options)
    }

    /// Check option values that would make the build silently do nothing.
    pub fn validate(&self) -> Result<()> {
        let ext = &self.file_extension;
        if !ext.starts_with('.') || ext.len() < 2 {
            return Err(Error::ConfigParse {
                message: format!("file_extension '{}' must start with '.'", ext),
                hint: Some(format!(
                    "use \".{}\"",
                    ext.trim_start_matches('.').trim()
                )),
            });
        }
        if ext[1..].contains(['.', '/', '\\']) {
            return Err(Error::ConfigParse {
                message: format!("file_extension '{}' must be a single extension", ext),
                hint: None,
            });
        }
        Ok(())
    }
}

/// A partial set of options; unset fields defer to the layer below.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OptionsOverride {
    #[serde(default, alias = "useStrict")]
    pub use_strict: Option<bool>,
    #[serde(default, alias = "fileExtension")]
    pub file_extension: Option<String>,
}

/// One named build: source folders, destination folder and options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Target {
    /// Source folders; each one's immediate subfolders become libraries.
    pub src: Vec<PathBuf>,
    /// Folder that receives one file per library.
    pub dest: PathBuf,
    #[serde(default)]
    pub options: OptionsOverride,
}

/// The whole `piecemeal.yaml` file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub options: OptionsOverride,
    #[serde(default)]
    pub targets: BTreeMap<String, Target>,
}

impl Config {
    /// Options for `target`, with `cli` applied last.
    pub fn options_for(&self, target: &Target, cli: &OptionsOverride) -> Result<Options> {
        Options::resolve([&self.options, &target.options, cli])
    }

    /// Look up targets by name; an empty `names` selects every target in name order.
    pub fn select_targets(&self, names: &[String]) -> Result<Vec<(&str, &Target)>> {
        if names.is_empty() {
            return Ok(self
                .targets
                .iter()
                .map(|(name, target)| (name.as_str(), target))
                .collect());
        }

        names
            .iter()
            .map(|name| {
                self.targets
                    .get_key_value(name)
                    .map(|(name, target)| (name.as_str(), target))
                    .ok_or_else(|| Error::UnknownTarget {
                        name: name.clone(),
                        available: self.target_names(),
                    })
            })
            .collect()
    }

    fn target_names(&self) -> String {
        if self.targets.is_empty() {
            "none".to_string()
        } else {
            self.targets.keys().cloned().collect::<Vec<_>>().join(", ")
        }
    }
}

/// Parse a configuration from YAML text.
pub fn parse(yaml_content: &str) -> Result<Config> {
    let config: Config = serde_yaml::from_str(yaml_content)?;

    for (name, target) in &config.targets {
        if target.src.is_empty() {
            return Err(Error::ConfigParse {
                message: format!("target '{}' has no source folders", name),
                hint: Some("add at least one path under 'src:'".to_string()),
            });
        }
    }

    Ok(config)
}

/// Parse a configuration from a YAML file path.
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    parse(&content)
}
