// ABOUTME: Field-level validation errors for weights, dates, memos, and goal inputs
// ABOUTME: Converts into AppError so callers can surface the offending field directly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{AppError, ErrorCode};
use serde_json::json;
use thiserror::Error;

/// A single input that violated its constraints.
///
/// Every variant names the offending field so the UI can attach the message
/// to the right input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Field was empty or absent
    #[error("{field} is required")]
    Required {
        /// Name of the missing field
        field: &'static str,
    },
    /// Field could not be parsed as a number
    #[error("{field} must be a number")]
    NotNumeric {
        /// Name of the non-numeric field
        field: &'static str,
    },
    /// Numeric field outside its allowed range
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        /// Name of the field
        field: &'static str,
        /// Lower bound of the allowed range
        min: f64,
        /// Upper bound of the allowed range
        max: f64,
        /// Offending value
        value: f64,
    },
    /// Text field longer than allowed
    #[error("{field} must be at most {max} characters")]
    TooLong {
        /// Name of the field
        field: &'static str,
        /// Maximum number of characters
        max: usize,
    },
    /// Date that must lie strictly after today
    #[error("{field} must be after today")]
    DateNotInFuture {
        /// Name of the date field
        field: &'static str,
    },
    /// Date string that is not a valid `YYYY-MM-DD` date
    #[error("{field} must be a date in YYYY-MM-DD format")]
    InvalidDate {
        /// Name of the date field
        field: &'static str,
    },
    /// Time string that is not a valid `HH:MM` time
    #[error("{field} must be a time in HH:MM format")]
    InvalidTime {
        /// Name of the time field
        field: &'static str,
    },
    /// Month number outside 1..=12
    #[error("month must be between 1 and 12, got {month}")]
    InvalidMonth {
        /// Offending month number
        month: u32,
    },
}

impl ValidationError {
    /// Name of the field this error refers to
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::Required { field }
            | Self::NotNumeric { field }
            | Self::OutOfRange { field, .. }
            | Self::TooLong { field, .. }
            | Self::DateNotInFuture { field }
            | Self::InvalidDate { field }
            | Self::InvalidTime { field } => field,
            Self::InvalidMonth { .. } => "month",
        }
    }

    /// Error code this validation failure maps to
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Required { .. } => ErrorCode::MissingRequiredField,
            Self::NotNumeric { .. } | Self::InvalidDate { .. } | Self::InvalidTime { .. } => {
                ErrorCode::InvalidFormat
            }
            Self::OutOfRange { .. } | Self::TooLong { .. } | Self::InvalidMonth { .. } => {
                ErrorCode::ValueOutOfRange
            }
            Self::DateNotInFuture { .. } => ErrorCode::InvalidInput,
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(error: ValidationError) -> Self {
        let field = error.field();
        Self::new(error.code(), error.to_string())
            .with_details(json!({ "field": field }))
    }
}
