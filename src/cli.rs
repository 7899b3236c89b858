//! CLI argument parsing, logging setup and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use env_logger::WriteStyle;

use crate::commands;

/// Piecemeal - Concatenate script folders in dependency order
#[derive(Parser, Debug)]
#[command(name = "piecemeal")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Colorize log output
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: ColorChoice,

    /// Set log level
    #[arg(long, global = true, value_name = "LEVEL", default_value = "info")]
    log_level: LogLevel,
}

/// Log verbosity
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// When to colorize log output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl From<ColorChoice> for WriteStyle {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => WriteStyle::Auto,
            ColorChoice::Always => WriteStyle::Always,
            ColorChoice::Never => WriteStyle::Never,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate, sort and write every library of the selected targets
    Build(commands::build::BuildArgs),

    /// Validate and sort without writing, and print the resulting order
    Check(commands::check::CheckArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        self.init_logging();

        match self.command {
            Commands::Build(args) => commands::build::execute(args),
            Commands::Check(args) => commands::check::execute(args),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }

    /// `RUST_LOG`, when set, refines the `--log-level` default.
    fn init_logging(&self) {
        env_logger::Builder::new()
            .filter_level(self.log_level.into())
            .parse_env("RUST_LOG")
            .write_style(self.color.into())
            .format_timestamp(None)
            .format_target(false)
            .init();
    }
}
