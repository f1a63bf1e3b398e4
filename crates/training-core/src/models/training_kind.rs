// ABOUTME: Training kind enumeration for the supported session variants
// ABOUTME: Maps activity codes to report labels and constructor parameter lists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::AppError;

/// Enumeration of supported training kinds
///
/// Each kind has a three-letter activity code used by sensor packages, a
/// label printed in reports, and an ordered list of constructor parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TrainingKind {
    /// Running (`RUN`)
    Running,
    /// Sports walking with height (`WLK`)
    SportsWalking,
    /// Swimming in a pool (`SWM`)
    Swimming,
}

impl TrainingKind {
    /// Every supported kind, in activity code order of the sensor protocol
    pub const ALL: [Self; 3] = [Self::Swimming, Self::Running, Self::SportsWalking];

    /// Activity code as sent by the sensor package
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Running => "RUN",
            Self::SportsWalking => "WLK",
            Self::Swimming => "SWM",
        }
    }

    /// Label printed in the report line
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::SportsWalking => "SportsWalking",
            Self::Swimming => "Swimming",
        }
    }

    /// Constructor parameters in positional order
    #[must_use]
    pub const fn parameter_names(&self) -> &'static [&'static str] {
        match self {
            Self::Running => &["action", "duration", "weight"],
            Self::SportsWalking => &["action", "duration", "weight", "height"],
            Self::Swimming => &["action", "duration", "weight", "length_pool", "count_pool"],
        }
    }

    /// Number of positional parameters the constructor takes
    #[must_use]
    pub const fn arity(&self) -> usize {
        self.parameter_names().len()
    }

    /// Look up a kind by activity code (exact, case-sensitive match)
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.code() == code)
    }
}

impl FromStr for TrainingKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| AppError::unknown_activity_code(s))
    }
}

impl fmt::Display for TrainingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_codes_round_trip() {
        for kind in TrainingKind::ALL {
            assert_eq!(TrainingKind::from_code(kind.code()), Some(kind));
        }
    }

    #[test]
    fn test_arity() {
        assert_eq!(TrainingKind::Running.arity(), 3);
        assert_eq!(TrainingKind::SportsWalking.arity(), 4);
        assert_eq!(TrainingKind::Swimming.arity(), 5);
    }

    #[test]
    fn test_unknown_code() {
        let err = "XYZ".parse::<TrainingKind>().unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownActivityCode);
        assert!("run".parse::<TrainingKind>().is_err());
    }
}
