// ABOUTME: Training session models and the per-report information message
// ABOUTME: Defines the Training trait, the Running/SportsWalking/Swimming variants and InfoMessage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! - `Training`: capability set shared by every session (distance, mean speed,
//!   calories, summary)
//! - `Running`, `SportsWalking`, `Swimming`: the concrete session variants
//! - `Workout`: tagged union of the variants, produced by the dispatcher
//! - `InfoMessage`: read-only summary rendered into the report line

/// Read-only training summary and its report line
pub mod info_message;

/// Session variants and the `Training` capability trait
pub mod session;

pub use info_message::InfoMessage;
pub use session::{Running, SportsWalking, Swimming, Training, TrainingBase, Workout};
