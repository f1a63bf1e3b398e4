// ABOUTME: Integration tests for the training session formulas
// ABOUTME: Verifies distance, mean speed, calories and the zero-duration policy per variant
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use training_report::errors::{AppResult, ErrorCode};
use training_report::models::{
    Running, SportsWalking, Swimming, Training, TrainingBase, Workout,
};

fn assert_close(actual: f64, expected: f64, what: &str) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "{what}: expected {expected}, got {actual}"
    );
}

/// A training that forgets to define its calorie formula
struct Rowing {
    base: TrainingBase,
}

impl Training for Rowing {
    fn label(&self) -> &str {
        "Rowing"
    }

    fn base(&self) -> &TrainingBase {
        &self.base
    }
}

#[test]
fn test_running_distance_matches_step_length() {
    for (action, duration, weight) in [(0, 0.5, 60.0), (1, 1.0, 70.0), (15000, 1.0, 75.0), (42195, 3.5, 64.2)] {
        let running = Running::new(action, duration, weight).unwrap();
        let expected = f64::from(action) * 0.65 / 1000.0;
        assert_close(running.get_distance(), expected, "distance");
        assert_close(running.get_mean_speed(), expected / duration, "mean speed");
    }
}

#[test]
fn test_walking_mean_speed_is_distance_over_duration() {
    let walking = SportsWalking::new(12000, 1.5, 82.0, 175.0).unwrap();
    assert_close(
        walking.get_mean_speed(),
        walking.get_distance() / 1.5,
        "mean speed",
    );
}

#[test]
fn test_swimming_mean_speed_uses_pool_laps() {
    let swimming = Swimming::new(1000, 0.5, 70.0, 50.0, 30).unwrap();
    assert_close(swimming.get_distance(), 1.38, "distance");
    assert_close(swimming.get_mean_speed(), 50.0 * 30.0 / 1000.0 / 0.5, "mean speed");
    assert_close(
        swimming.get_spent_calories().unwrap(),
        (3.0 + 1.1) * 2.0 * 70.0 * 0.5,
        "calories",
    );
}

#[test]
fn test_running_calories_formula() {
    let running = Running::new(9000, 0.75, 68.0).unwrap();
    let speed = 9000.0 * 0.65 / 1000.0 / 0.75;
    let expected = (18.0 * speed + 1.79) * 68.0 / 1000.0 * 0.75 * 60.0;
    assert_close(running.get_spent_calories().unwrap(), expected, "calories");
}

#[test]
fn test_walking_calories_formula() {
    let walking = SportsWalking::new(9000, 1.0, 75.0, 180.0).unwrap();
    let speed_ms = 5.85 * 0.278;
    let expected = (0.035 * 75.0 + (speed_ms * speed_ms / 1.8) * 0.029 * 75.0) * 60.0;
    let calories = walking.get_spent_calories().unwrap();
    assert!((calories - expected).abs() < 1e-9, "got {calories}");
}

#[test]
fn test_missing_calorie_formula_names_training() {
    let rowing = Rowing {
        base: TrainingBase::new(500, 1.0, 80.0).unwrap(),
    };
    let err = rowing.get_spent_calories().unwrap_err();
    assert_eq!(err.code, ErrorCode::UnsupportedOperation);
    assert!(err.message.contains("Rowing"), "message: {}", err.message);

    let summary: AppResult<_> = rowing.show_training_info();
    assert_eq!(summary.unwrap_err().code, ErrorCode::UnsupportedOperation);
}

#[test]
fn test_zero_duration_rejected_consistently() {
    for duration in [0.0, -0.0, -1.0, f64::NAN, f64::INFINITY] {
        assert_eq!(
            Running::new(100, duration, 70.0).unwrap_err().code,
            ErrorCode::ValueOutOfRange
        );
        assert_eq!(
            SportsWalking::new(100, duration, 70.0, 170.0).unwrap_err().code,
            ErrorCode::ValueOutOfRange
        );
        assert_eq!(
            Swimming::new(100, duration, 70.0, 25.0, 4).unwrap_err().code,
            ErrorCode::ValueOutOfRange
        );
    }
}

#[test]
fn test_small_positive_duration_stays_finite() {
    let running = Running::new(100, 1e-6, 70.0).unwrap();
    assert!(running.get_mean_speed().is_finite());
    assert!(running.get_spent_calories().unwrap().is_finite());
}

#[test]
fn test_show_training_info_uses_variant_label() {
    let workouts: [Workout; 3] = [
        Running::new(15000, 1.0, 75.0).unwrap().into(),
        SportsWalking::new(9000, 1.0, 75.0, 180.0).unwrap().into(),
        Swimming::new(720, 1.0, 80.0, 25.0, 40).unwrap().into(),
    ];
    let labels: Vec<String> = workouts
        .iter()
        .map(|workout| workout.show_training_info().unwrap().training_type)
        .collect();
    assert_eq!(labels, vec!["Running", "SportsWalking", "Swimming"]);
}

#[test]
fn test_workout_serializes_with_type_tag() {
    let workout: Workout = Running::new(15000, 1.0, 75.0).unwrap().into();
    let value = serde_json::to_value(workout).unwrap();
    assert_eq!(value["type"], "running");
    assert_eq!(value["base"]["action"], 15000);
}
