//! # Check Command Implementation
//!
//! Validates every selected target without writing anything: dependencies and
//! references are resolved, each library is sorted, and the resulting order is
//! printed. A failing check exits with the same status a build would.

use anyhow::Result;
use clap::Args;

use piecemeal::pipeline::{self, Mode};

use super::targets::TargetArgs;

/// Validate libraries and print their order
#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub inputs: TargetArgs,
}

/// Execute the `check` command.
pub fn execute(args: CheckArgs) -> Result<()> {
    let mut library_count = 0;

    for job in args.inputs.jobs()? {
        println!("Checking {}", job.label());
        let reports = pipeline::run(&job.sources, &job.dest, &job.options, Mode::DryRun)?;

        for report in &reports {
            println!("   {}", report.source.display());
            for library in &report.libraries {
                println!("      {}: {}", library.name, library.order.join(", "));
            }
            library_count += report.libraries.len();
        }
    }

    println!("OK: {} library(s) checked.", library_count);
    Ok(())
}
