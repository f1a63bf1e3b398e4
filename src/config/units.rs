// ABOUTME: Units configuration shared by every training formula
// ABOUTME: Fixed to the sensor units contract and initialized once per process
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Units Configuration Module
//!
//! Holds the unit conversion factors and step lengths used by the session
//! formulas. The global instance is built once on first access from the
//! fixed units contract and never mutated afterwards; nothing in the
//! process environment can change it.

use serde::Serialize;
use std::sync::OnceLock;
use training_core::constants::{calories, units};

/// Global configuration singleton
static UNITS_CONFIG: OnceLock<UnitsConfig> = OnceLock::new();

/// Unit conversion factors and per-action distances
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitsConfig {
    /// Distance covered by one running or walking step (meters)
    pub step_length_m: f64,
    /// Distance covered by one swimming stroke (meters)
    pub stroke_length_m: f64,
    /// Meters per kilometer
    pub meters_per_km: f64,
    /// Minutes per hour
    pub minutes_per_hour: f64,
    /// Centimeters per meter
    pub cm_per_meter: f64,
    /// Multiplier converting km/h to m/s
    pub kmh_to_ms: f64,
}

impl Default for UnitsConfig {
    fn default() -> Self {
        Self {
            step_length_m: calories::STEP_LENGTH_M,
            stroke_length_m: calories::STROKE_LENGTH_M,
            meters_per_km: units::METERS_PER_KM,
            minutes_per_hour: units::MINUTES_PER_HOUR,
            cm_per_meter: units::CM_PER_METER,
            kmh_to_ms: units::KMH_TO_MS,
        }
    }
}

impl UnitsConfig {
    /// Get the global configuration instance
    #[must_use]
    pub fn global() -> &'static Self {
        UNITS_CONFIG.get_or_init(Self::default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_units_contract() {
        let config = UnitsConfig::default();
        assert!((config.step_length_m - 0.65).abs() < f64::EPSILON);
        assert!((config.stroke_length_m - 1.38).abs() < f64::EPSILON);
        assert!((config.meters_per_km - 1000.0).abs() < f64::EPSILON);
        assert!((config.minutes_per_hour - 60.0).abs() < f64::EPSILON);
        assert!((config.cm_per_meter - 100.0).abs() < f64::EPSILON);
        assert!((config.kmh_to_ms - 0.278).abs() < f64::EPSILON);
    }

    #[test]
    fn test_global_matches_defaults() {
        assert_eq!(UnitsConfig::global(), &UnitsConfig::default());
    }
}
