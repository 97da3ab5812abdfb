// ABOUTME: Configuration error types for nutrition engine settings
// ABOUTME: Covers environment parsing failures and out-of-range coefficients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, ErrorCode};
use std::env;
use thiserror::Error;

/// Configuration validation and loading errors
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Ordered values are out of order (e.g., activity tiers not increasing)
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Environment variable access error
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] env::VarError),

    /// Failed to parse an environment override
    #[error("Parse error: {0}")]
    Parse(String),

    /// A single value outside its acceptable range
    #[error("Value out of range: {0}")]
    ValueOutOfRange(String),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        let code = match error {
            ConfigError::EnvVar(_) | ConfigError::Parse(_) => ErrorCode::ConfigError,
            ConfigError::InvalidRange(_) | ConfigError::ValueOutOfRange(_) => {
                ErrorCode::ConfigInvalid
            }
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}
