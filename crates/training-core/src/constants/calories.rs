// ABOUTME: Step lengths and calorie formula coefficients for each training kind
// ABOUTME: Empirically fixed values, not derived from other constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Distance covered by one running or walking step (meters)
pub const STEP_LENGTH_M: f64 = 0.65;

/// Distance covered by one swimming stroke (meters)
pub const STROKE_LENGTH_M: f64 = 1.38;

/// Running calorie formula coefficients
pub mod running {
    /// Multiplier applied to mean speed (km/h)
    pub const MEAN_SPEED_MULTIPLIER: f64 = 18.0;
    /// Shift added to the scaled mean speed
    pub const MEAN_SPEED_SHIFT: f64 = 1.79;
}

/// Sports walking calorie formula coefficients
pub mod walking {
    /// Weight multiplier of the base term
    pub const WEIGHT_MULTIPLIER: f64 = 0.035;
    /// Weight multiplier of the speed-squared-over-height term
    pub const SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
}

/// Swimming calorie formula coefficients
pub mod swimming {
    /// Shift added to mean speed (km/h)
    pub const MEAN_SPEED_SHIFT: f64 = 1.1;
    /// Multiplier applied to the shifted speed
    pub const WEIGHT_MULTIPLIER: f64 = 2.0;
}
