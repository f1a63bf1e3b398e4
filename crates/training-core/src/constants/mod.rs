// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for unit conversion and per-training calorie formulas
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Unit conversion and measurement constants
pub mod units;

/// Step lengths and empirically fixed calorie formula coefficients
pub mod calories;

/// Service identifiers used in structured logs
pub mod service_names {
    /// Name of the report binary
    pub const TRAINING_REPORT: &str = "training-report";
}
