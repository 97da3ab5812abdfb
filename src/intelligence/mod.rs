// ABOUTME: Intelligence module hosting the nutrition target engine
// ABOUTME: Re-exports calculator types for crate-level access
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Deterministic nutrition calculations. Nothing here performs I/O.

/// BMR, TDEE, calorie target, and protein-priority macro split
pub mod nutrition_calculator;

pub use nutrition_calculator::{
    calculate_macro_split, calculate_mifflin_st_jeor, calculate_target_calories, calculate_tdee,
    compute_target, compute_target_from_input, compute_target_with_config, compute_targets,
    ActivityLevel, Goal, MacroSplit, NutritionTarget, Profile, ProfileInput, ProfileVariant, Sex,
};
