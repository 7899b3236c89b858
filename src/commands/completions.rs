//! # Completions Command Implementation
//!
//! Prints a shell completion script for `piecemeal` to stdout.
//!
//! ```bash
//! piecemeal completions bash > ~/.local/share/bash-completion/completions/piecemeal
//! piecemeal completions zsh > ~/.zfunc/_piecemeal
//! ```

use anyhow::Result;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io;

use crate::cli::Cli;

/// Generate shell completion scripts
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// The shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Execute the `completions` command.
pub fn execute(args: CompletionsArgs) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(args.shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
