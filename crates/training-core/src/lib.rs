// ABOUTME: Core types and constants for the Pierre training report
// ABOUTME: Foundation crate with error handling, unit constants, and training kinds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Training Core
//!
//! Foundation crate providing shared types and constants for the training
//! report. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode` and `AppResult`
//! - **constants**: Unit conversion factors and calorie formula coefficients
//! - **models**: The `TrainingKind` catalogue (activity codes, labels, arity)

/// Unified error handling system with standard error codes
pub mod errors;

/// Unit conversion factors and formula coefficients organized by domain
pub mod constants;

/// Core data models shared by the session family and the dispatcher
pub mod models;
