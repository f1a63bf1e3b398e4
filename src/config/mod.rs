// ABOUTME: Configuration module for the training report
// ABOUTME: Process-wide immutable units configuration initialized once at startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Unit conversion factors and step lengths
pub mod units;

pub use units::UnitsConfig;
