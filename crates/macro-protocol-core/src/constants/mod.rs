// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Energy densities, service identifiers, and environment variable names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large block.

/// Atwater energy densities for macronutrients (kcal per gram)
pub mod atwater {
    /// Protein: 4 kcal/g
    pub const PROTEIN_KCAL_PER_G: f64 = 4.0;
    /// Carbohydrate: 4 kcal/g
    pub const CARB_KCAL_PER_G: f64 = 4.0;
    /// Fat: 9 kcal/g
    pub const FAT_KCAL_PER_G: f64 = 9.0;
}

/// Service identification for logging and diagnostics
pub mod service_names {
    /// Library / service name used in structured logs
    pub const MACRO_PROTOCOL: &str = "macro-protocol";
    /// Tracing target for the crate's own events
    pub const LOG_TARGET: &str = "macro_protocol";
}

/// Environment variables recognised by the configuration layer
pub mod env_config {
    /// Protein anchor in g/kg bodyweight
    pub const PROTEIN_G_PER_KG: &str = "MACRO_PROTOCOL_PROTEIN_G_PER_KG";
    /// Fat floor in g/kg bodyweight
    pub const FAT_G_PER_KG: &str = "MACRO_PROTOCOL_FAT_G_PER_KG";

    /// Sedentary activity multiplier
    pub const ACTIVITY_SEDENTARY: &str = "MACRO_PROTOCOL_ACTIVITY_SEDENTARY";
    /// Light activity multiplier
    pub const ACTIVITY_LIGHT: &str = "MACRO_PROTOCOL_ACTIVITY_LIGHT";
    /// Moderate activity multiplier
    pub const ACTIVITY_MODERATE: &str = "MACRO_PROTOCOL_ACTIVITY_MODERATE";
    /// Active multiplier
    pub const ACTIVITY_ACTIVE: &str = "MACRO_PROTOCOL_ACTIVITY_ACTIVE";
    /// Athlete multiplier
    pub const ACTIVITY_ATHLETE: &str = "MACRO_PROTOCOL_ACTIVITY_ATHLETE";

    /// Cut goal multiplier
    pub const GOAL_CUT: &str = "MACRO_PROTOCOL_GOAL_CUT";
    /// Maintain goal multiplier
    pub const GOAL_MAINTAIN: &str = "MACRO_PROTOCOL_GOAL_MAINTAIN";
    /// Bulk goal multiplier
    pub const GOAL_BULK: &str = "MACRO_PROTOCOL_GOAL_BULK";

    /// Every override key, in the order they are applied
    pub const ALL: [&str; 10] = [
        PROTEIN_G_PER_KG,
        FAT_G_PER_KG,
        ACTIVITY_SEDENTARY,
        ACTIVITY_LIGHT,
        ACTIVITY_MODERATE,
        ACTIVITY_ACTIVE,
        ACTIVITY_ATHLETE,
        GOAL_CUT,
        GOAL_MAINTAIN,
        GOAL_BULK,
    ];
}

/// Profile field names, shared by validation errors and input parsing
pub mod profile_fields {
    /// Biological sex
    pub const SEX: &str = "sex";
    /// Age in whole years
    pub const AGE_YEARS: &str = "age_years";
    /// Height in centimeters
    pub const HEIGHT_CM: &str = "height_cm";
    /// Weight in kilograms
    pub const WEIGHT_KG: &str = "weight_kg";
    /// Activity tier
    pub const ACTIVITY_LEVEL: &str = "activity_level";
    /// Calorie goal
    pub const GOAL: &str = "goal";
}
