//! # Nider CLI
//!
//! Command-line interface for rendering text images.
//!
//! ## Usage
//!
//! ```bash
//! # Render a job file
//! nider render job.json
//!
//! # List size presets
//! nider presets
//!
//! # More logging
//! RUST_LOG=nider=debug nider render job.json
//! ```

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use nider::{NiderError, job::JobFile, presets::Preset};
use tracing_subscriber::EnvFilter;

/// Nider - text images for social media
#[derive(Parser, Debug)]
#[command(name = "nider")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render an image from a JSON job file
    Render {
        /// Job file
        job: PathBuf,

        /// Override the output path from the job
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// List available size presets
    Presets,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), NiderError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Render { job, output } => {
            let mut job_file = JobFile::load(&job)?;
            // Overrides are relative to the working directory, not the job file.
            if let Some(output) = output {
                job_file.output = std::env::current_dir()?.join(output);
            }
            let base = job.parent().unwrap_or(Path::new("."));

            let report = job_file.run(base)?;
            println!(
                "Saved {} ({}x{}{})",
                report.path.display(),
                report.width,
                report.height,
                if report.fits { "" } else { ", grown to fit" }
            );
            for notice in &report.notices {
                println!("  note: {}", notice);
            }
        }
        Commands::Presets => {
            println!("Available presets:");
            for preset in Preset::ALL {
                println!("  {:<26} {}x{}", preset.name, preset.width, preset.height);
            }
        }
    }

    Ok(())
}
