//! # Build Target Selection
//!
//! Both `build` and `check` accept the same inputs: either named targets from
//! a `piecemeal.yaml` file, or a one-off `--src`/`--dest` pair given on the
//! command line. This module turns those arguments into a list of [`Job`]s
//! with fully resolved options.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use piecemeal::config::{self, Options, OptionsOverride, DEFAULT_CONFIG_FILENAME};
use piecemeal::error::Error;

/// Arguments shared by every command that runs the pipeline
#[derive(Args, Debug, Default)]
pub struct TargetArgs {
    /// Targets to run, in the order given. Runs every target when omitted.
    #[arg(value_name = "TARGET", conflicts_with = "src")]
    pub targets: Vec<String>,

    /// Path to the configuration file.
    #[arg(
        short,
        long,
        value_name = "FILE",
        env = "PIECEMEAL_CONFIG",
        default_value = DEFAULT_CONFIG_FILENAME
    )]
    pub config: PathBuf,

    /// Source folder to build directly, bypassing the config file.
    /// May be given more than once.
    #[arg(long, value_name = "DIR")]
    pub src: Vec<PathBuf>,

    /// Destination folder for a direct build. Required with --src when
    /// building; a check writes nothing and may omit it.
    #[arg(long, value_name = "DIR", requires = "src")]
    pub dest: Option<PathBuf>,

    /// Prepend "use strict"; to every output file.
    #[arg(long, conflicts_with = "no_strict")]
    pub strict: bool,

    /// Do not prepend "use strict"; to output files.
    #[arg(long)]
    pub no_strict: bool,

    /// Extension of fragment files and of output files (e.g. ".js").
    #[arg(long, value_name = "EXT")]
    pub extension: Option<String>,
}

/// One resolved unit of work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    /// Target name, or `None` for a direct `--src`/`--dest` build.
    pub target: Option<String>,
    pub sources: Vec<PathBuf>,
    /// Empty for a direct check given no `--dest`.
    pub dest: PathBuf,
    pub options: Options,
}

impl TargetArgs {
    /// Options given as command-line flags; they override every config layer.
    pub fn cli_overrides(&self) -> OptionsOverride {
        let use_strict = if self.strict {
            Some(true)
        } else if self.no_strict {
            Some(false)
        } else {
            None
        };

        OptionsOverride {
            use_strict,
            file_extension: self.extension.clone(),
        }
    }

    /// Resolve the arguments into jobs, in execution order.
    pub fn jobs(&self) -> Result<Vec<Job>> {
        let overrides = self.cli_overrides();

        if !self.src.is_empty() {
            return Ok(vec![Job {
                target: None,
                sources: self.src.clone(),
                dest: self.dest.clone().unwrap_or_default(),
                options: Options::resolve([&overrides])?,
            }]);
        }

        if !self.config.exists() {
            return Err(Error::ConfigParse {
                message: format!("Configuration file not found: {}", self.config.display()),
                hint: Some(format!(
                    "create {} or pass --src and --dest",
                    DEFAULT_CONFIG_FILENAME
                )),
            }
            .into());
        }

        let config = config::from_file(&self.config)?;
        let selected = config.select_targets(&self.targets)?;
        if selected.is_empty() {
            return Err(Error::ConfigParse {
                message: format!("No targets defined in {}", self.config.display()),
                hint: Some("add a 'targets:' section".to_string()),
            }
            .into());
        }

        selected
            .into_iter()
            .map(|(name, target)| -> Result<Job> {
                Ok(Job {
                    target: Some(name.to_string()),
                    sources: target.src.clone(),
                    dest: target.dest.clone(),
                    options: config.options_for(target, &overrides)?,
                })
            })
            .collect()
    }
}

impl Job {
    /// Label used in command output.
    pub fn label(&self) -> String {
        match &self.target {
            Some(name) => format!("target '{}'", name),
            None => "direct build".to_string(),
        }
    }
}
