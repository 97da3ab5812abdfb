// ABOUTME: Configuration module for nutrition engine coefficients
// ABOUTME: Environment-only configuration with validation and a lazily loaded global
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module for Macro Protocol
//!
//! Configuration is environment-only: defaults carry the canonical
//! coefficients and `MACRO_PROTOCOL_*` variables override individual values.

/// Configuration error types
pub mod error;
/// Nutrition engine coefficients
pub mod nutrition;

pub use error::ConfigError;
pub use nutrition::{
    ActivityFactorsConfig, BmrConfig, GoalAdjustmentConfig, MacronutrientConfig, NutritionConfig,
};
