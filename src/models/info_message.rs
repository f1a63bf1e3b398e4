// ABOUTME: Information message produced by a training session summary
// ABOUTME: Renders the fixed-format report line with three decimal digits per value
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Summary of one completed training, created once per report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoMessage {
    /// Training type label (`Running`, `SportsWalking`, `Swimming`)
    pub training_type: String,
    /// Duration in hours
    pub duration: f64,
    /// Distance in kilometers
    pub distance: f64,
    /// Mean speed in km/h
    pub speed: f64,
    /// Spent energy in kcal
    pub calories: f64,
}

impl InfoMessage {
    /// Create a message from already computed values
    #[must_use]
    pub fn new(
        training_type: impl Into<String>,
        duration: f64,
        distance: f64,
        speed: f64,
        calories: f64,
    ) -> Self {
        Self {
            training_type: training_type.into(),
            duration,
            distance,
            speed,
            calories,
        }
    }

    /// Render the report line
    #[must_use]
    pub fn get_message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Training type: {}; Duration: {:.3} h; Distance: {:.3} km; Avg speed: {:.3} km/h; Calories spent: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_format() {
        let message = InfoMessage::new("Swimming", 1.0, 0.9936, 1.0, 336.0);
        assert_eq!(
            message.get_message(),
            "Training type: Swimming; Duration: 1.000 h; Distance: 0.994 km; \
             Avg speed: 1.000 km/h; Calories spent: 336.000."
        );
    }

    #[test]
    fn test_rendering_is_repeatable() {
        let message = InfoMessage::new("Running", 1.5, 9.75, 6.5, 797.805);
        assert_eq!(message.get_message(), message.get_message());
        assert_eq!(message.get_message(), message.to_string());
    }
}
