//! # Build Command Implementation
//!
//! Runs the full pipeline for every selected target: each source folder is
//! loaded, validated, sorted and written to the target's destination as one
//! file per library. The first error stops the build; files already written
//! for earlier source folders are left in place.

use anyhow::Result;
use clap::{ArgGroup, Args};

use piecemeal::pipeline::{self, BuildReport, Mode};

use super::targets::{Job, TargetArgs};

/// Arguments for the build command
#[derive(Args, Debug)]
#[command(group(ArgGroup::new("direct_build").args(["src"]).requires("dest")))]
pub struct BuildArgs {
    #[command(flatten)]
    pub inputs: TargetArgs,

    /// Validate and sort without writing any files
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// Execute the build command
pub fn execute(args: BuildArgs) -> Result<()> {
    let mode = if args.dry_run {
        Mode::DryRun
    } else {
        Mode::Write
    };

    for job in args.inputs.jobs()? {
        log::debug!("Running {} with {:?}", job.label(), job.options);
        let reports = pipeline::run(&job.sources, &job.dest, &job.options, mode)?;

        if !args.quiet {
            print_reports(&job, &reports);
        }
    }

    Ok(())
}

fn print_reports(job: &Job, reports: &[BuildReport]) {
    for report in reports {
        match report.mode {
            Mode::Write => println!(
                "{} file(s) written to '{}'.",
                report.files_written(),
                report.dest.display()
            ),
            Mode::DryRun => {
                println!(
                    "Dry run ({}): {} file(s) would be written to '{}'.",
                    job.label(),
                    report.libraries.len(),
                    report.dest.display()
                );
                for library in &report.libraries {
                    println!("   {}", library.output.display());
                }
            }
        }
    }
}
