// ABOUTME: Main library entry point for the Pierre training report
// ABOUTME: Computes distance, mean speed and spent calories for running, walking and swimming
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Training Report
//!
//! Summarizes completed training sessions from raw sensor packages.
//!
//! ## Architecture
//!
//! - **Dispatcher**: maps an activity code (`SWM`, `RUN`, `WLK`) and its
//!   positional arguments to a [`models::Workout`]
//! - **Models**: the `Training` capability trait, its variants and the
//!   `InfoMessage` summary
//! - **Report**: summarizes a session and writes one line per report
//! - **Config**: process-wide units configuration, initialized once
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use training_report::dispatcher::read_package;
//! use training_report::errors::AppResult;
//! use training_report::report::run;
//!
//! fn main() -> AppResult<()> {
//!     let training = read_package("RUN", &[15000.0, 1.0, 75.0])?;
//!     run(&training)
//! }
//! ```

/// Units configuration initialized once per process
pub mod config;

/// Activity code dispatch into training sessions
pub mod dispatcher;

/// Report output formats (text line, JSON)
pub mod formatters;

/// Structured logging setup
pub mod logging;

/// Training sessions and the information message
pub mod models;

/// Report driver
pub mod report;

/// Unified error handling, re-exported from the core crate
pub use training_core::errors;

/// Unit conversion and formula constants, re-exported from the core crate
pub use training_core::constants;
