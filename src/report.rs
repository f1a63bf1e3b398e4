// ABOUTME: Report driver turning training sessions into emitted report lines
// ABOUTME: Processes packages strictly in input order; a failing package aborts only its own record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Report Driver
//!
//! [`run`] is the single-session entry point: summarize, format, print to
//! standard output. [`ReportDriver`] does the same over any writer and
//! processes whole package lists, collecting per-package failures in a
//! [`ReportSummary`].

use std::io::{self, Write};

use tracing::{error, info, info_span};
use training_core::errors::{AppError, AppResult, ErrorCode};

use crate::dispatcher::WorkoutPackage;
use crate::formatters::{format_message, OutputFormat};
use crate::models::{InfoMessage, Training};

/// Summarize a training and print its report line to standard output
///
/// # Errors
///
/// Propagates calorie formula errors and returns `OUTPUT_ERROR` if stdout cannot be written
pub fn run<T: Training + ?Sized>(training: &T) -> AppResult<()> {
    let stdout = io::stdout();
    let mut driver = ReportDriver::new(stdout.lock(), OutputFormat::Text);
    driver.report(training)?;
    Ok(())
}

/// A package that could not be reported
#[derive(Debug)]
pub struct PackageFailure {
    /// Position of the package in the input list
    pub index: usize,
    /// Activity code of the package
    pub code: String,
    /// Why the package failed
    pub error: AppError,
}

/// Outcome of processing a package list
#[derive(Debug, Default)]
pub struct ReportSummary {
    /// Number of report lines written
    pub emitted: usize,
    /// Packages that failed, in input order
    pub failures: Vec<PackageFailure>,
}

impl ReportSummary {
    /// True when every package produced a report line
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Error codes of the failed packages, in input order
    #[must_use]
    pub fn failure_codes(&self) -> Vec<ErrorCode> {
        self.failures.iter().map(|failure| failure.error.code).collect()
    }
}

/// Writes one formatted report line per training
pub struct ReportDriver<W: Write> {
    writer: W,
    format: OutputFormat,
}

impl<W: Write> ReportDriver<W> {
    /// Create a driver writing to `writer` in `format`
    #[must_use]
    pub const fn new(writer: W, format: OutputFormat) -> Self {
        Self { writer, format }
    }

    /// Summarize `training`, write its line and return the summary
    ///
    /// # Errors
    ///
    /// Propagates calorie formula errors, `SERIALIZATION_ERROR` for JSON
    /// rendering failures and `OUTPUT_ERROR` for write failures
    pub fn report<T: Training + ?Sized>(&mut self, training: &T) -> AppResult<InfoMessage> {
        let message = training.show_training_info()?;
        let line = format_message(&message, self.format)?;
        writeln!(self.writer, "{line}")?;
        Ok(message)
    }

    /// Dispatch and report every package in input order
    ///
    /// A failing package is logged and recorded; the remaining packages are
    /// still processed.
    pub fn run_packages(&mut self, packages: &[WorkoutPackage]) -> ReportSummary {
        let mut summary = ReportSummary::default();

        for (index, package) in packages.iter().enumerate() {
            let span = info_span!("package", index, code = %package.code);
            let _guard = span.enter();

            match package.read().and_then(|workout| self.report(&workout)) {
                Ok(message) => {
                    summary.emitted += 1;
                    info!(training.type = %message.training_type, "Report emitted");
                }
                Err(err) => {
                    error!(error.code = %err.code, "Package failed: {err}");
                    summary.failures.push(PackageFailure {
                        index,
                        code: package.code.clone(),
                        error: err,
                    });
                }
            }
        }

        if let Err(err) = self.writer.flush() {
            error!("Failed to flush report output: {err}");
        }
        summary
    }

    /// Consume the driver and return its writer
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}
