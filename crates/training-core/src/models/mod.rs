// ABOUTME: Core data models shared across the training report workspace
// ABOUTME: Re-exports the training kind catalogue
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Training kind enumeration with activity codes and report labels
pub mod training_kind;

pub use training_kind::TrainingKind;
