// ABOUTME: Training report binary printing summaries for the demonstration packages
// ABOUTME: One report line per package on stdout, logs on stderr, non-zero exit on any failure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Print the demonstration reports
//! training-report
//!
//! # One JSON object per report
//! training-report --format json
//!
//! # Debug logging on stderr
//! training-report -v
//!
//! # Report a single package instead of the demonstration list
//! training-report --package RUN 15000 1 75
//! ```

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use training_report::dispatcher::{demo_packages, read_package};
use training_report::errors::{AppError, AppResult};
use training_report::formatters::OutputFormat;
use training_report::logging::LoggingConfig;
use training_report::report::{run, ReportDriver};

#[derive(Parser)]
#[command(
    name = "training-report",
    version,
    about = "Training session report",
    long_about = "Prints distance, mean speed and spent calories for the demonstration running, walking and swimming packages."
)]
struct Cli {
    /// Output format (text, json)
    #[arg(long, short = 'f', default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,

    /// Report one package given as an activity code followed by its values
    #[arg(
        long,
        num_args = 2..,
        value_names = ["CODE", "VALUES"],
        allow_negative_numbers = true,
        conflicts_with = "format"
    )]
    package: Option<Vec<String>>,
}

/// Parse `CODE VALUE...` and print its report line through the single-session driver
fn report_single(args: &[String]) -> AppResult<()> {
    let Some((code, values)) = args.split_first() else {
        return Err(AppError::invalid_input("--package needs an activity code"));
    };
    let data = values
        .iter()
        .map(|value| {
            value
                .parse::<f64>()
                .map_err(|_| AppError::invalid_input(format!("not a number: {value}")))
        })
        .collect::<AppResult<Vec<f64>>>()?;

    let training = read_package(code, &data)?;
    run(&training)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    if let Err(e) = logging.init() {
        eprintln!("Failed to initialize logging: {e}");
    }

    if let Some(args) = cli.package {
        return match report_single(&args) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                error!(error.code = %e.code, "Package failed: {e}");
                ExitCode::FAILURE
            }
        };
    }

    let packages = demo_packages();
    info!(packages = packages.len(), format = %cli.format, "Processing packages");

    let stdout = io::stdout();
    let mut driver = ReportDriver::new(stdout.lock(), cli.format);
    let summary = driver.run_packages(&packages);

    if summary.is_success() {
        ExitCode::SUCCESS
    } else {
        error!(
            failed = summary.failures.len(),
            emitted = summary.emitted,
            "Some packages could not be reported"
        );
        ExitCode::FAILURE
    }
}
