// ABOUTME: Profile validation error types for the nutrition target engine
// ABOUTME: Structured InvalidProfile causes that convert into AppError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{AppError, ErrorCode};
use serde_json::json;

/// Reasons a biometric profile is rejected.
///
/// Every variant maps to `ErrorCode::InvalidProfile` when converted into an
/// [`AppError`]; no partial result is ever produced alongside one of these.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProfileError {
    /// A required field was not supplied
    #[error("Missing required field '{field}'")]
    MissingField {
        /// Name of the missing field
        field: &'static str,
    },

    /// A numeric field could not be read as a finite number
    #[error("Field '{field}' must be a finite number, got '{value}'")]
    NotNumeric {
        /// Name of the offending field
        field: &'static str,
        /// Raw value as supplied
        value: String,
    },

    /// A whole-number field held a fractional or out-of-range value
    #[error("Field '{field}' must be a whole number, got {value}")]
    NotInteger {
        /// Name of the offending field
        field: &'static str,
        /// Value as supplied
        value: f64,
    },

    /// A numeric field was zero or negative
    #[error("Field '{field}' must be strictly positive, got {value}")]
    NonPositive {
        /// Name of the offending field
        field: &'static str,
        /// Value as supplied
        value: f64,
    },

    /// An enumerated field held a value outside its set
    #[error("Unknown {field} '{value}'. Valid options: {expected}")]
    UnknownVariant {
        /// Name of the offending field
        field: &'static str,
        /// Value as supplied
        value: String,
        /// Comma-separated accepted values
        expected: &'static str,
    },
}

impl ProfileError {
    /// Field the error refers to
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::MissingField { field }
            | Self::NotNumeric { field, .. }
            | Self::NotInteger { field, .. }
            | Self::NonPositive { field, .. }
            | Self::UnknownVariant { field, .. } => *field,
        }
    }

    /// Short machine-readable reason
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::MissingField { .. } => "missing",
            Self::NotNumeric { .. } => "not_numeric",
            Self::NotInteger { .. } => "not_integer",
            Self::NonPositive { .. } => "non_positive",
            Self::UnknownVariant { .. } => "unknown_variant",
        }
    }
}

impl From<ProfileError> for AppError {
    fn from(error: ProfileError) -> Self {
        let field = error.field();
        let reason = error.reason();
        Self::new(ErrorCode::InvalidProfile, error.to_string())
            .with_field(field)
            .with_details(json!({ "reason": reason }))
            .with_source(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_error_converts_to_invalid_profile() {
        let err = ProfileError::NonPositive {
            field: "weight_kg",
            value: -5.0,
        };
        let app: AppError = err.into();

        assert_eq!(app.code, ErrorCode::InvalidProfile);
        assert_eq!(app.context.field.as_deref(), Some("weight_kg"));
        assert_eq!(app.context.details["reason"], "non_positive");
        assert!(app.message.contains("-5"));
    }

    #[test]
    fn test_unknown_variant_message_lists_options() {
        let err = ProfileError::UnknownVariant {
            field: "goal",
            value: "shred".to_owned(),
            expected: "cut, maintain, bulk",
        };
        assert_eq!(
            err.to_string(),
            "Unknown goal 'shred'. Valid options: cut, maintain, bulk"
        );
    }
}
