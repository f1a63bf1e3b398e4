// ABOUTME: Output format abstraction for rendering training reports
// ABOUTME: Supports the fixed text line (default) and one JSON object per report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Output Format Abstraction Layer
//!
//! ## Supported Formats
//!
//! - **Text**: Default format, the fixed `Training type: ...` report line
//! - **JSON**: One compact JSON object per report, for downstream tooling
//!
//! ## Usage
//!
//! ```rust,no_run
//! use training_report::formatters::{format_message, OutputFormat};
//! use training_report::models::InfoMessage;
//!
//! let message = InfoMessage::new("Running", 1.0, 9.75, 9.75, 797.805);
//! if let Ok(line) = format_message(&message, OutputFormat::Json) {
//!     println!("{line}");
//! }
//! ```

use std::fmt;
use std::str::FromStr;

use training_core::errors::{AppError, AppResult};

use crate::models::InfoMessage;

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable report line (default)
    #[default]
    Text,
    /// Compact JSON object
    Json,
}

impl OutputFormat {
    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(AppError::invalid_input(format!(
                "Unknown output format '{other}', expected 'text' or 'json'"
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Render a training summary in the requested format
///
/// # Errors
///
/// Returns `SERIALIZATION_ERROR` if JSON serialization fails
pub fn format_message(message: &InfoMessage, format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Text => Ok(message.get_message()),
        OutputFormat::Json => Ok(serde_json::to_string(message)?),
    }
}
