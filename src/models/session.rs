// ABOUTME: Training session variants with distance, mean speed, and calorie formulas
// ABOUTME: Running, SportsWalking and Swimming override the Training trait where their physics differ
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Training sessions
//!
//! The [`Training`] trait carries the shared formulas as default methods:
//!
//! - distance: `action * step_length / meters_per_km`
//! - mean speed: `distance / duration`
//! - calories: no default, implementors must override or the call fails
//!   with `UNSUPPORTED_OPERATION` naming the implementor
//!
//! Every variant validates its inputs on construction, so a constructed
//! session always has a strictly positive duration and mean speed is defined.

use serde::Serialize;
use tracing::debug;
use training_core::constants::calories::{running, swimming, walking};
use training_core::errors::{AppError, AppResult};
use training_core::models::TrainingKind;

use super::InfoMessage;
use crate::config::UnitsConfig;

/// Reject values that are not finite and strictly positive
fn ensure_positive(name: &str, value: f64) -> AppResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(AppError::out_of_range(format!(
            "{name} must be a finite number greater than zero, got {value}"
        )))
    }
}

/// Raw measurements shared by every training: action count, duration and weight
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrainingBase {
    action: u32,
    duration: f64,
    weight: f64,
}

impl TrainingBase {
    /// Validate and build the shared measurements
    ///
    /// # Errors
    ///
    /// Returns `VALUE_OUT_OF_RANGE` if `duration` or `weight` is not finite and > 0
    pub fn new(action: u32, duration: f64, weight: f64) -> AppResult<Self> {
        Ok(Self {
            action,
            duration: ensure_positive("duration", duration)?,
            weight: ensure_positive("weight", weight)?,
        })
    }

    /// Steps or strokes performed
    #[must_use]
    pub const fn action(&self) -> u32 {
        self.action
    }

    /// Duration in hours
    #[must_use]
    pub const fn duration(&self) -> f64 {
        self.duration
    }

    /// Athlete weight in kilograms
    #[must_use]
    pub const fn weight(&self) -> f64 {
        self.weight
    }

    /// Duration in minutes
    #[must_use]
    pub fn duration_minutes(&self) -> f64 {
        self.duration * UnitsConfig::global().minutes_per_hour
    }
}

/// Capability set shared by every training session
pub trait Training {
    /// Report label of this training
    fn label(&self) -> &str;

    /// Shared raw measurements
    fn base(&self) -> &TrainingBase;

    /// Distance covered by one action, in meters
    fn step_length_m(&self) -> f64 {
        UnitsConfig::global().step_length_m
    }

    /// Distance in kilometers
    fn get_distance(&self) -> f64 {
        f64::from(self.base().action()) * self.step_length_m()
            / UnitsConfig::global().meters_per_km
    }

    /// Mean speed in km/h
    fn get_mean_speed(&self) -> f64 {
        self.get_distance() / self.base().duration()
    }

    /// Spent energy in kcal
    ///
    /// # Errors
    ///
    /// Returns `UNSUPPORTED_OPERATION` naming the training when the
    /// implementor does not define its calorie formula
    fn get_spent_calories(&self) -> AppResult<f64> {
        Err(AppError::unsupported_operation(
            "get_spent_calories",
            self.label(),
        ))
    }

    /// Summarize the training into an information message
    ///
    /// # Errors
    ///
    /// Propagates the error of `get_spent_calories`
    fn show_training_info(&self) -> AppResult<InfoMessage> {
        let message = InfoMessage::new(
            self.label(),
            self.base().duration(),
            self.get_distance(),
            self.get_mean_speed(),
            self.get_spent_calories()?,
        );
        debug!(
            training.type = %message.training_type,
            training.distance_km = message.distance,
            training.speed_kmh = message.speed,
            training.calories = message.calories,
            "Training summarized"
        );
        Ok(message)
    }
}

/// Running session
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Running {
    base: TrainingBase,
}

impl Running {
    /// Build a running session
    ///
    /// # Errors
    ///
    /// Returns `VALUE_OUT_OF_RANGE` if `duration` or `weight` is not finite and > 0
    pub fn new(action: u32, duration: f64, weight: f64) -> AppResult<Self> {
        Ok(Self {
            base: TrainingBase::new(action, duration, weight)?,
        })
    }
}

impl Training for Running {
    fn label(&self) -> &str {
        TrainingKind::Running.label()
    }

    fn base(&self) -> &TrainingBase {
        &self.base
    }

    fn get_spent_calories(&self) -> AppResult<f64> {
        let units = UnitsConfig::global();
        Ok(
            (running::MEAN_SPEED_MULTIPLIER * self.get_mean_speed() + running::MEAN_SPEED_SHIFT)
                * self.base.weight()
                / units.meters_per_km
                * self.base.duration_minutes(),
        )
    }
}

/// Sports walking session, which also needs the athlete height
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SportsWalking {
    base: TrainingBase,
    height: f64,
}

impl SportsWalking {
    /// Build a sports walking session
    ///
    /// # Errors
    ///
    /// Returns `VALUE_OUT_OF_RANGE` if `duration`, `weight` or `height` is not finite and > 0
    pub fn new(action: u32, duration: f64, weight: f64, height: f64) -> AppResult<Self> {
        Ok(Self {
            base: TrainingBase::new(action, duration, weight)?,
            height: ensure_positive("height", height)?,
        })
    }

    /// Athlete height in centimeters
    #[must_use]
    pub const fn height(&self) -> f64 {
        self.height
    }
}

impl Training for SportsWalking {
    fn label(&self) -> &str {
        TrainingKind::SportsWalking.label()
    }

    fn base(&self) -> &TrainingBase {
        &self.base
    }

    fn get_spent_calories(&self) -> AppResult<f64> {
        let units = UnitsConfig::global();
        let speed_ms = self.get_mean_speed() * units.kmh_to_ms;
        let height_m = self.height / units.cm_per_meter;
        let weight = self.base.weight();

        Ok((walking::WEIGHT_MULTIPLIER * weight
            + (speed_ms.powi(2) / height_m) * walking::SPEED_HEIGHT_MULTIPLIER * weight)
            * self.base.duration_minutes())
    }
}

/// Pool swimming session; mean speed comes from pool length and lap count
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Swimming {
    base: TrainingBase,
    length_pool: f64,
    count_pool: u32,
}

impl Swimming {
    /// Build a swimming session
    ///
    /// `count_pool` counts whole laps; fractional laps are rejected by the
    /// dispatcher before a session is built.
    ///
    /// # Errors
    ///
    /// Returns `VALUE_OUT_OF_RANGE` if `duration`, `weight` or `length_pool` is not finite and > 0
    pub fn new(
        action: u32,
        duration: f64,
        weight: f64,
        length_pool: f64,
        count_pool: u32,
    ) -> AppResult<Self> {
        Ok(Self {
            base: TrainingBase::new(action, duration, weight)?,
            length_pool: ensure_positive("length_pool", length_pool)?,
            count_pool,
        })
    }

    /// Pool length in meters
    #[must_use]
    pub const fn length_pool(&self) -> f64 {
        self.length_pool
    }

    /// Number of pool laps swum
    #[must_use]
    pub const fn count_pool(&self) -> u32 {
        self.count_pool
    }
}

impl Training for Swimming {
    fn label(&self) -> &str {
        TrainingKind::Swimming.label()
    }

    fn base(&self) -> &TrainingBase {
        &self.base
    }

    fn step_length_m(&self) -> f64 {
        UnitsConfig::global().stroke_length_m
    }

    fn get_mean_speed(&self) -> f64 {
        self.length_pool * f64::from(self.count_pool)
            / UnitsConfig::global().meters_per_km
            / self.base.duration()
    }

    fn get_spent_calories(&self) -> AppResult<f64> {
        Ok(
            (self.get_mean_speed() + swimming::MEAN_SPEED_SHIFT)
                * swimming::WEIGHT_MULTIPLIER
                * self.base.weight()
                * self.base.duration(),
        )
    }
}

/// Any supported training, as produced by the dispatcher
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Workout {
    /// Running session
    Running(Running),
    /// Sports walking session
    SportsWalking(SportsWalking),
    /// Swimming session
    Swimming(Swimming),
}

impl Workout {
    /// Kind of the wrapped session
    #[must_use]
    pub const fn kind(&self) -> TrainingKind {
        match self {
            Self::Running(_) => TrainingKind::Running,
            Self::SportsWalking(_) => TrainingKind::SportsWalking,
            Self::Swimming(_) => TrainingKind::Swimming,
        }
    }

    fn as_training(&self) -> &dyn Training {
        match self {
            Self::Running(training) => training,
            Self::SportsWalking(training) => training,
            Self::Swimming(training) => training,
        }
    }
}

impl Training for Workout {
    fn label(&self) -> &str {
        self.as_training().label()
    }

    fn base(&self) -> &TrainingBase {
        self.as_training().base()
    }

    fn step_length_m(&self) -> f64 {
        self.as_training().step_length_m()
    }

    fn get_distance(&self) -> f64 {
        self.as_training().get_distance()
    }

    fn get_mean_speed(&self) -> f64 {
        self.as_training().get_mean_speed()
    }

    fn get_spent_calories(&self) -> AppResult<f64> {
        self.as_training().get_spent_calories()
    }

    fn show_training_info(&self) -> AppResult<InfoMessage> {
        self.as_training().show_training_info()
    }
}

impl From<Running> for Workout {
    fn from(training: Running) -> Self {
        Self::Running(training)
    }
}

impl From<SportsWalking> for Workout {
    fn from(training: SportsWalking) -> Self {
        Self::SportsWalking(training)
    }
}

impl From<Swimming> for Workout {
    fn from(training: Swimming) -> Self {
        Self::Swimming(training)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use training_core::errors::ErrorCode;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_running_formulas() {
        let running = Running::new(15000, 1.0, 75.0).unwrap();
        assert_close(running.get_distance(), 9.75);
        assert_close(running.get_mean_speed(), 9.75);
        assert_close(running.get_spent_calories().unwrap(), 797.805);
    }

    #[test]
    fn test_walking_formulas() {
        let walking = SportsWalking::new(9000, 1.0, 75.0, 180.0).unwrap();
        assert_close(walking.get_distance(), 5.85);
        assert_close(walking.get_mean_speed(), 5.85);
        let calories = walking.get_spent_calories().unwrap();
        assert!((calories - 349.251_747_5).abs() < 1e-6, "got {calories}");
    }

    #[test]
    fn test_swimming_overrides_speed_and_step() {
        let swimming = Swimming::new(720, 1.0, 80.0, 25.0, 40).unwrap();
        assert_close(swimming.get_distance(), 0.9936);
        assert_close(swimming.get_mean_speed(), 1.0);
        assert_close(swimming.get_spent_calories().unwrap(), 336.0);
    }

    #[test]
    fn test_zero_duration_rejected() {
        let err = Running::new(100, 0.0, 70.0).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
        assert!(SportsWalking::new(100, 1.0, 70.0, 0.0).is_err());
        assert!(Swimming::new(100, f64::NAN, 70.0, 25.0, 1).is_err());
    }

    #[test]
    fn test_workout_delegates_to_variant() {
        let workout = Workout::from(Swimming::new(720, 1.0, 80.0, 25.0, 40).unwrap());
        assert_eq!(workout.kind(), TrainingKind::Swimming);
        assert_eq!(workout.label(), "Swimming");
        assert_close(workout.get_mean_speed(), 1.0);
        assert_close(workout.step_length_m(), 1.38);
    }
}
