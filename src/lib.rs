// ABOUTME: Main library entry point for the Macro Protocol nutrition engine
// ABOUTME: Computes daily calorie and macronutrient targets from a biometric profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Macro Protocol
//!
//! Deterministic nutrition target engine. A biometric [`Profile`](intelligence::Profile)
//! goes in; a [`NutritionTarget`](intelligence::NutritionTarget) with maintenance
//! calories, a goal-adjusted calorie target, and a protein-priority macro split
//! comes out.
//!
//! ## Architecture
//!
//! - **Intelligence**: the pure calculation pipeline (BMR, TDEE, goal, macros)
//! - **Config**: tunable coefficients with environment overrides
//! - **Lead gate**: withholds the macro breakdown until contact details are given
//! - **Formatters**: text and JSON rendering
//! - **Errors**: structured `AppError` with stable error codes
//!
//! ## Example
//!
//! ```rust
//! use macro_protocol::intelligence::{compute_target, ActivityLevel, Goal, Profile, Sex};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let profile = Profile::new(Sex::Male, 30, 175.0, 80.0, ActivityLevel::Light, Goal::Cut)?;
//! let target = compute_target(&profile)?;
//! assert_eq!(target.protein_grams, 176);
//! # Ok(())
//! # }
//! ```

/// Engine configuration with environment overrides
pub mod config;

/// Application constants
pub mod constants;

/// Unified error handling
pub mod errors;

/// Text and JSON rendering of targets
pub mod formatters;

/// Nutrition calculation pipeline
pub mod intelligence;

/// Lead-capture gate for the macro breakdown
pub mod lead_gate;

/// Structured logging setup
pub mod logging;
