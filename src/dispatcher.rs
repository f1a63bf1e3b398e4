// ABOUTME: Sensor package dispatcher mapping activity codes to training sessions
// ABOUTME: Validates argument arity and numeric ranges before constructing a Workout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Package Dispatcher
//!
//! A sensor package is an activity code plus positional numeric arguments.
//! [`read_package`] resolves the code to a [`TrainingKind`], checks the
//! argument count against the kind's constructor arity and builds the
//! matching [`Workout`]. Unknown codes and arity mismatches are explicit
//! errors.

use serde::{Deserialize, Serialize};
use tracing::debug;
use training_core::errors::{AppError, AppResult};
use training_core::models::TrainingKind;

use crate::models::{Running, SportsWalking, Swimming, Workout};

/// Raw sensor package: activity code and positional arguments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutPackage {
    /// Activity code (`SWM`, `RUN`, `WLK`)
    pub code: String,
    /// Positional arguments in the constructor order of the training kind
    pub data: Vec<f64>,
}

impl WorkoutPackage {
    /// Create a package from a code and its arguments
    #[must_use]
    pub fn new(code: impl Into<String>, data: impl Into<Vec<f64>>) -> Self {
        Self {
            code: code.into(),
            data: data.into(),
        }
    }

    /// Build the training this package describes
    ///
    /// # Errors
    ///
    /// See [`read_package`]
    pub fn read(&self) -> AppResult<Workout> {
        read_package(&self.code, &self.data)
    }
}

/// Fixed demonstration list processed by the report binary
#[must_use]
pub fn demo_packages() -> Vec<WorkoutPackage> {
    vec![
        WorkoutPackage::new("SWM", [720.0, 1.0, 80.0, 25.0, 40.0]),
        WorkoutPackage::new("RUN", [15000.0, 1.0, 75.0]),
        WorkoutPackage::new("WLK", [9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Build a training session from an activity code and positional arguments
///
/// # Errors
///
/// - `UNKNOWN_ACTIVITY_CODE` if `code` is not one of `SWM`, `RUN`, `WLK`
/// - `ARITY_MISMATCH` if `data` does not hold exactly the kind's parameters
/// - `INVALID_INPUT` if a count (`action`, `count_pool`) is not a non-negative whole number
/// - `VALUE_OUT_OF_RANGE` if a measurement is not finite and > 0
pub fn read_package(code: &str, data: &[f64]) -> AppResult<Workout> {
    let kind: TrainingKind = code.parse()?;
    if data.len() != kind.arity() {
        return Err(AppError::arity_mismatch(
            kind.label(),
            kind.arity(),
            data.len(),
        ));
    }

    debug!(package.code = code, package.arity = data.len(), "Reading package");

    let action = to_count("action", data[0])?;
    let (duration, weight) = (data[1], data[2]);

    let workout = match kind {
        TrainingKind::Running => Running::new(action, duration, weight)?.into(),
        TrainingKind::SportsWalking => {
            SportsWalking::new(action, duration, weight, data[3])?.into()
        }
        TrainingKind::Swimming => Swimming::new(
            action,
            duration,
            weight,
            data[3],
            to_count("count_pool", data[4])?,
        )?
        .into(),
    };
    Ok(workout)
}

/// Convert a positional argument into a whole, non-negative count
fn to_count(name: &str, value: f64) -> AppResult<u32> {
    if !value.is_finite() || value < 0.0 || value.fract() > 0.0 || value > f64::from(u32::MAX) {
        return Err(AppError::invalid_input(format!(
            "{name} must be a non-negative whole number, got {value}"
        )));
    }
    Ok(value as u32)
}
