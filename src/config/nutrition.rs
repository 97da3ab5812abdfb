// ABOUTME: Nutrition engine configuration for BMR, activity, goal, and macro constants
// ABOUTME: Canonical coefficients with environment overrides and consistency validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Engine Configuration
//!
//! Every constant the nutrition target engine uses lives here so that the
//! historical calculator variants (2.0 g/kg protein, a 1.75 "active" tier)
//! can be reproduced through configuration rather than code.
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle`, Katch & Katch (2010), Exercise Physiology
//! - Protein: Phillips & Van Loon (2011) DOI: 10.1080/02640414.2011.619204

use super::error::ConfigError;
use crate::constants::env_config;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::{debug, warn};

/// Global configuration singleton
static NUTRITION_CONFIG: OnceLock<NutritionConfig> = OnceLock::new();

/// Nutrition engine configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// Basal Metabolic Rate (BMR) coefficients
    pub bmr: BmrConfig,
    /// Activity factor multipliers for TDEE calculation
    pub activity_factors: ActivityFactorsConfig,
    /// Goal multipliers applied to TDEE
    pub goal_adjustments: GoalAdjustmentConfig,
    /// Protein-priority macronutrient anchors
    pub macronutrients: MacronutrientConfig,
}

/// Mifflin-St Jeor coefficients
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Male constant (+5)
    pub msj_male_constant: f64,
    /// Female constant (-161)
    pub msj_female_constant: f64,
}

/// Activity factor multipliers for TDEE calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary (desk job, little exercise): 1.2
    pub sedentary: f64,
    /// Light (1-3 sessions/week): 1.375
    pub light: f64,
    /// Moderate (3-5 sessions/week): 1.55
    pub moderate: f64,
    /// Active (6-7 sessions/week): 1.725
    pub active: f64,
    /// Athlete (twice-daily training or physical job): 1.9
    pub athlete: f64,
}

impl ActivityFactorsConfig {
    /// Multipliers in tier order, lowest first
    #[must_use]
    pub const fn ordered(&self) -> [f64; 5] {
        [
            self.sedentary,
            self.light,
            self.moderate,
            self.active,
            self.athlete,
        ]
    }
}

/// Calorie multipliers relative to maintenance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalAdjustmentConfig {
    /// Fat loss: 20% deficit
    pub cut: f64,
    /// Maintenance: no adjustment
    pub maintain: f64,
    /// Lean gain: 10% surplus
    pub bulk: f64,
}

/// Protein-priority split anchors (grams per kg bodyweight)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacronutrientConfig {
    /// Protein anchor: 2.2 g/kg
    pub protein_g_per_kg: f64,
    /// Fat floor: 0.9 g/kg
    pub fat_g_per_kg: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
        }
    }
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            light: 1.375,
            moderate: 1.55,
            active: 1.725,
            athlete: 1.9,
        }
    }
}

impl Default for GoalAdjustmentConfig {
    fn default() -> Self {
        Self {
            cut: 0.80,
            maintain: 1.0,
            bulk: 1.10,
        }
    }
}

impl Default for MacronutrientConfig {
    fn default() -> Self {
        Self {
            protein_g_per_kg: 2.2,
            fat_g_per_kg: 0.9,
        }
    }
}

impl NutritionConfig {
    /// Get the global configuration instance
    ///
    /// Loaded once from the environment; falls back to defaults if the
    /// environment holds invalid overrides.
    pub fn global() -> &'static Self {
        NUTRITION_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load nutrition config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration: defaults, then environment overrides, then validation
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        debug!(
            protein_g_per_kg = config.macronutrients.protein_g_per_kg,
            fat_g_per_kg = config.macronutrients.fat_g_per_kg,
            "Nutrition config loaded"
        );
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any coefficient is non-finite, non-positive, or out of order
    pub fn validate(&self) -> Result<(), ConfigError> {
        let factors = self.activity_factors.ordered();
        if let Some(bad) = factors.iter().find(|f| !f.is_finite() || **f < 1.0) {
            return Err(ConfigError::ValueOutOfRange(format!(
                "activity multipliers must be finite and >= 1.0, got {bad}"
            )));
        }
        if factors.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(ConfigError::InvalidRange(
                "activity multipliers must strictly increase from sedentary to athlete",
            ));
        }

        let goals = &self.goal_adjustments;
        for (name, value) in [
            ("cut", goals.cut),
            ("maintain", goals.maintain),
            ("bulk", goals.bulk),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::ValueOutOfRange(format!(
                    "{name} goal multiplier must be positive, got {value}"
                )));
            }
        }
        if !(goals.cut < goals.maintain && goals.maintain < goals.bulk) {
            return Err(ConfigError::InvalidRange(
                "goal multipliers must satisfy cut < maintain < bulk",
            ));
        }

        let macros = &self.macronutrients;
        for (name, value) in [
            ("protein_g_per_kg", macros.protein_g_per_kg),
            ("fat_g_per_kg", macros.fat_g_per_kg),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::ValueOutOfRange(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}: '{val}'")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(
            env_config::PROTEIN_G_PER_KG,
            &mut self.macronutrients.protein_g_per_kg,
        )?;
        Self::apply_env_var(
            env_config::FAT_G_PER_KG,
            &mut self.macronutrients.fat_g_per_kg,
        )?;

        Self::apply_env_var(
            env_config::ACTIVITY_SEDENTARY,
            &mut self.activity_factors.sedentary,
        )?;
        Self::apply_env_var(env_config::ACTIVITY_LIGHT, &mut self.activity_factors.light)?;
        Self::apply_env_var(
            env_config::ACTIVITY_MODERATE,
            &mut self.activity_factors.moderate,
        )?;
        Self::apply_env_var(
            env_config::ACTIVITY_ACTIVE,
            &mut self.activity_factors.active,
        )?;
        Self::apply_env_var(
            env_config::ACTIVITY_ATHLETE,
            &mut self.activity_factors.athlete,
        )?;

        Self::apply_env_var(env_config::GOAL_CUT, &mut self.goal_adjustments.cut)?;
        Self::apply_env_var(
            env_config::GOAL_MAINTAIN,
            &mut self.goal_adjustments.maintain,
        )?;
        Self::apply_env_var(env_config::GOAL_BULK, &mut self.goal_adjustments.bulk)?;

        Ok(self)
    }
}
