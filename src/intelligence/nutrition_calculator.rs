// ABOUTME: Nutrition target engine using Mifflin-St Jeor and a protein-priority macro split
// ABOUTME: BMR, TDEE, goal-adjusted calories, and protein/fat/carb grams and percentages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Calculator Module
//!
//! Maps a biometric [`Profile`] to a daily [`NutritionTarget`]. Every function
//! here is pure: no I/O, no shared mutable state, safe to call from any thread.
//!
//! Rounding uses `f64::round` (half away from zero) applied independently at
//! each step, so the calories implied by the macro grams can drift a few kcal
//! from `target_calories`.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - Phillips, S.M., & Van Loon, L.J. (2011). Dietary protein for athletes.
//!   *Journal of Sports Sciences*, 29(sup1), S29-S38.
//!   <https://doi.org/10.1080/02640414.2011.619204>

use crate::config::{
    ActivityFactorsConfig, BmrConfig, GoalAdjustmentConfig, MacronutrientConfig, NutritionConfig,
};
use crate::constants::{atwater, profile_fields};
use crate::errors::{AppError, ProfileError};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Enumerated profile field parsed from a case-insensitive name
pub trait ProfileVariant: FromStr<Err = ProfileError> + Copy {
    /// Accepted values, comma-separated
    const OPTIONS: &'static str;
}

/// Biological sex for the BMR offset
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    /// Male (+5 kcal offset)
    Male,
    /// Female (-161 kcal offset)
    Female,
}

impl Sex {
    /// Lowercase name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl ProfileVariant for Sex {
    const OPTIONS: &'static str = "male, female";
}

impl FromStr for Sex {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            _ => Err(ProfileError::UnknownVariant {
                field: profile_fields::SEX,
                value: s.to_owned(),
                expected: Self::OPTIONS,
            }),
        }
    }
}

/// Activity tier for the TDEE multiplier, ordered lowest to highest
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Desk job, little or no exercise
    Sedentary,
    /// Training 1-3 days/week
    Light,
    /// Training 3-5 days/week
    Moderate,
    /// Training 6-7 days/week
    Active,
    /// Twice-daily training or a physical job
    Athlete,
}

impl ActivityLevel {
    /// All tiers in ascending order
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::Light,
        Self::Moderate,
        Self::Active,
        Self::Athlete,
    ];

    /// Lowercase name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Active => "active",
            Self::Athlete => "athlete",
        }
    }

    /// Short description of the tier
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Sedentary => "Desk job, little or no exercise",
            Self::Light => "Training 1-3 days per week",
            Self::Moderate => "Training 3-5 days per week",
            Self::Active => "Training 6-7 days per week",
            Self::Athlete => "Twice-daily training or physical job",
        }
    }

    /// Zero-based position on the tier scale
    #[must_use]
    pub const fn index(&self) -> usize {
        *self as usize
    }

    /// Tier at a zero-based slider position
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Multiplier for this tier
    #[must_use]
    pub const fn multiplier(&self, config: &ActivityFactorsConfig) -> f64 {
        match self {
            Self::Sedentary => config.sedentary,
            Self::Light => config.light,
            Self::Moderate => config.moderate,
            Self::Active => config.active,
            Self::Athlete => config.athlete,
        }
    }
}

impl ProfileVariant for ActivityLevel {
    const OPTIONS: &'static str = "sedentary, light, moderate, active, athlete";
}

impl FromStr for ActivityLevel {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sedentary" => Ok(Self::Sedentary),
            "light" => Ok(Self::Light),
            "moderate" => Ok(Self::Moderate),
            "active" => Ok(Self::Active),
            "athlete" => Ok(Self::Athlete),
            _ => Err(ProfileError::UnknownVariant {
                field: profile_fields::ACTIVITY_LEVEL,
                value: s.to_owned(),
                expected: Self::OPTIONS,
            }),
        }
    }
}

/// Calorie goal relative to maintenance
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    /// Fat loss (deficit)
    Cut,
    /// Maintenance
    Maintain,
    /// Lean gain (surplus)
    Bulk,
}

impl Goal {
    /// All goals, deficit first
    pub const ALL: [Self; 3] = [Self::Cut, Self::Maintain, Self::Bulk];

    /// Lowercase name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Cut => "cut",
            Self::Maintain => "maintain",
            Self::Bulk => "bulk",
        }
    }

    /// Multiplier for this goal
    #[must_use]
    pub const fn multiplier(&self, config: &GoalAdjustmentConfig) -> f64 {
        match self {
            Self::Cut => config.cut,
            Self::Maintain => config.maintain,
            Self::Bulk => config.bulk,
        }
    }
}

impl ProfileVariant for Goal {
    const OPTIONS: &'static str = "cut, maintain, bulk";
}

impl FromStr for Goal {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cut" => Ok(Self::Cut),
            "maintain" => Ok(Self::Maintain),
            "bulk" => Ok(Self::Bulk),
            _ => Err(ProfileError::UnknownVariant {
                field: profile_fields::GOAL,
                value: s.to_owned(),
                expected: Self::OPTIONS,
            }),
        }
    }
}

macro_rules! impl_display_by_name {
    ($($ty:ty),+) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        })+
    };
}

impl_display_by_name!(Sex, ActivityLevel, Goal);

/// Validated biometric profile
///
/// Fields are public so callers can build one directly; [`compute_target`]
/// re-validates before computing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Biological sex
    pub sex: Sex,
    /// Age in whole years
    pub age_years: u32,
    /// Height in centimeters
    pub height_cm: f64,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Activity tier
    pub activity_level: ActivityLevel,
    /// Calorie goal
    pub goal: Goal,
}

impl Profile {
    /// Build a profile, rejecting non-positive or non-finite measurements
    ///
    /// # Errors
    ///
    /// Returns `ProfileError` if age is zero or height/weight are not positive finite numbers
    pub fn new(
        sex: Sex,
        age_years: u32,
        height_cm: f64,
        weight_kg: f64,
        activity_level: ActivityLevel,
        goal: Goal,
    ) -> Result<Self, ProfileError> {
        let profile = Self {
            sex,
            age_years,
            height_cm,
            weight_kg,
            activity_level,
            goal,
        };
        profile.validate()?;
        Ok(profile)
    }

    /// Check the numeric invariants
    ///
    /// No clamping to realistic human ranges is applied; any positive input passes.
    ///
    /// # Errors
    ///
    /// Returns the first violated field as a `ProfileError`
    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.age_years == 0 {
            return Err(ProfileError::NonPositive {
                field: profile_fields::AGE_YEARS,
                value: 0.0,
            });
        }
        ensure_positive(profile_fields::HEIGHT_CM, self.height_cm)?;
        ensure_positive(profile_fields::WEIGHT_KG, self.weight_kg)?;
        Ok(())
    }
}

/// Unvalidated profile as submitted by a form or JSON caller
///
/// Numeric fields accept JSON numbers or numeric strings; enumerated fields
/// accept case-insensitive names. camelCase keys are canonical and
/// snake_case aliases are accepted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileInput {
    /// Biological sex
    #[serde(default)]
    pub sex: Option<Value>,
    /// Age in whole years
    #[serde(default, alias = "age_years")]
    pub age_years: Option<Value>,
    /// Height in centimeters
    #[serde(default, alias = "height_cm")]
    pub height_cm: Option<Value>,
    /// Body weight in kilograms
    #[serde(default, alias = "weight_kg")]
    pub weight_kg: Option<Value>,
    /// Activity tier
    #[serde(default, alias = "activity_level")]
    pub activity_level: Option<Value>,
    /// Calorie goal
    #[serde(default)]
    pub goal: Option<Value>,
}

impl TryFrom<ProfileInput> for Profile {
    type Error = ProfileError;

    fn try_from(input: ProfileInput) -> Result<Self, Self::Error> {
        let sex = read_variant::<Sex>(profile_fields::SEX, input.sex.as_ref())?;
        let age_years = read_whole_number(profile_fields::AGE_YEARS, input.age_years.as_ref())?;
        let height_cm = read_number(profile_fields::HEIGHT_CM, input.height_cm.as_ref())?;
        let weight_kg = read_number(profile_fields::WEIGHT_KG, input.weight_kg.as_ref())?;
        let activity_level = read_variant::<ActivityLevel>(
            profile_fields::ACTIVITY_LEVEL,
            input.activity_level.as_ref(),
        )?;
        let goal = read_variant::<Goal>(profile_fields::GOAL, input.goal.as_ref())?;

        Self::new(sex, age_years, height_cm, weight_kg, activity_level, goal)
    }
}

fn ensure_positive(field: &'static str, value: f64) -> Result<f64, ProfileError> {
    if !value.is_finite() {
        return Err(ProfileError::NotNumeric {
            field,
            value: value.to_string(),
        });
    }
    if value <= 0.0 {
        return Err(ProfileError::NonPositive { field, value });
    }
    Ok(value)
}

fn raw_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn read_number(field: &'static str, value: Option<&Value>) -> Result<f64, ProfileError> {
    let value = match value {
        None | Some(Value::Null) => return Err(ProfileError::MissingField { field }),
        Some(Value::String(s)) if s.trim().is_empty() => {
            return Err(ProfileError::MissingField { field })
        }
        Some(v) => v,
    };

    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|n| n.is_finite())
    .ok_or_else(|| ProfileError::NotNumeric {
        field,
        value: raw_text(value),
    })?;

    ensure_positive(field, number)
}

fn read_whole_number(field: &'static str, value: Option<&Value>) -> Result<u32, ProfileError> {
    let number = read_number(field, value)?;
    if number.fract() != 0.0 || number > f64::from(u32::MAX) {
        return Err(ProfileError::NotInteger {
            field,
            value: number,
        });
    }
    Ok(number as u32)
}

fn read_variant<T: ProfileVariant>(
    field: &'static str,
    value: Option<&Value>,
) -> Result<T, ProfileError> {
    match value {
        None | Some(Value::Null) => Err(ProfileError::MissingField { field }),
        Some(Value::String(s)) if s.trim().is_empty() => Err(ProfileError::MissingField { field }),
        Some(Value::String(s)) => s.parse(),
        Some(other) => Err(ProfileError::UnknownVariant {
            field,
            value: other.to_string(),
            expected: T::OPTIONS,
        }),
    }
}

/// Protein/fat/carbohydrate allocation for a calorie target
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MacroSplit {
    /// Protein grams
    pub protein_grams: u32,
    /// Fat grams
    pub fat_grams: u32,
    /// Carbohydrate grams
    pub carb_grams: u32,
    /// Protein share of target calories (percent)
    pub protein_percent: u32,
    /// Fat share of target calories (percent)
    pub fat_percent: u32,
    /// Carbohydrate share of target calories (percent)
    pub carb_percent: u32,
}

/// Daily nutrition target, freshly computed per call
///
/// Every field saturates at `u32::MAX`. Only absurd inputs (hundreds of
/// thousands of kilograms or centimeters) reach that bound, and once the
/// gram fields saturate the percentages no longer sum to 100.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NutritionTarget {
    /// BMR x activity multiplier, rounded (kcal)
    pub total_daily_energy_expenditure: u32,
    /// TDEE x goal multiplier, rounded (kcal)
    pub target_calories: u32,
    /// Protein grams
    pub protein_grams: u32,
    /// Fat grams
    pub fat_grams: u32,
    /// Carbohydrate grams
    pub carb_grams: u32,
    /// Protein share of target calories (percent)
    pub protein_percent: u32,
    /// Fat share of target calories (percent)
    pub fat_percent: u32,
    /// Carbohydrate share of target calories (percent)
    pub carb_percent: u32,
}

impl NutritionTarget {
    /// Calories implied by the macro grams (Atwater factors)
    #[must_use]
    pub fn macro_calories(&self) -> u32 {
        let kcal = f64::from(self.protein_grams).mul_add(
            atwater::PROTEIN_KCAL_PER_G,
            f64::from(self.fat_grams).mul_add(
                atwater::FAT_KCAL_PER_G,
                f64::from(self.carb_grams) * atwater::CARB_KCAL_PER_G,
            ),
        );
        kcal.round() as u32
    }

    /// Difference between macro calories and the target
    ///
    /// A few kcal either way is expected from independent rounding; a large
    /// positive value means protein and fat alone exceed the target.
    #[must_use]
    pub fn calorie_drift(&self) -> i64 {
        i64::from(self.macro_calories()) - i64::from(self.target_calories)
    }
}

/// Round kilocalories or grams to a non-negative integer, saturating at `u32::MAX`
fn round_non_negative(value: f64) -> u32 {
    value.max(0.0).round() as u32
}

fn percent_of(kcal: f64, target_calories: u32) -> u32 {
    if target_calories == 0 {
        return 0;
    }
    round_non_negative(kcal / f64::from(target_calories) * 100.0)
}

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `sex_offset`
/// - Male: +5
/// - Female: -161
///
/// No floor is applied; implausible inputs produce implausible (possibly negative) values.
///
/// # Reference
/// Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
#[must_use]
#[allow(clippy::suboptimal_flops)] // unfused arithmetic keeps parity with the web calculator
pub fn calculate_mifflin_st_jeor(
    weight_kg: f64,
    height_cm: f64,
    age_years: u32,
    sex: Sex,
    config: &BmrConfig,
) -> f64 {
    let sex_constant = match sex {
        Sex::Male => config.msj_male_constant,
        Sex::Female => config.msj_female_constant,
    };

    config.msj_weight_coef * weight_kg
        + config.msj_height_coef * height_cm
        + config.msj_age_coef * f64::from(age_years)
        + sex_constant
}

/// Calculate Total Daily Energy Expenditure (unrounded)
///
/// Formula: TDEE = BMR x Activity Factor
///
/// - Sedentary: 1.2
/// - Light: 1.375
/// - Moderate: 1.55
/// - Active: 1.725
/// - Athlete: 1.9
#[must_use]
pub fn calculate_tdee(
    bmr: f64,
    activity_level: ActivityLevel,
    config: &ActivityFactorsConfig,
) -> f64 {
    bmr * activity_level.multiplier(config)
}

/// Goal-adjusted daily calories from the unrounded TDEE
///
/// Floored at zero.
#[must_use]
pub fn calculate_target_calories(tdee: f64, goal: Goal, config: &GoalAdjustmentConfig) -> u32 {
    round_non_negative(tdee * goal.multiplier(config))
}

/// Protein-priority macro split
///
/// Protein and fat are fixed per kg bodyweight; the remaining calories go to
/// carbohydrates and never go negative.
#[must_use]
pub fn calculate_macro_split(
    weight_kg: f64,
    target_calories: u32,
    config: &MacronutrientConfig,
) -> MacroSplit {
    let protein_grams = round_non_negative(weight_kg * config.protein_g_per_kg);
    let fat_grams = round_non_negative(weight_kg * config.fat_g_per_kg);

    let protein_kcal = f64::from(protein_grams) * atwater::PROTEIN_KCAL_PER_G;
    let fat_kcal = f64::from(fat_grams) * atwater::FAT_KCAL_PER_G;
    let remaining_kcal = (f64::from(target_calories) - protein_kcal - fat_kcal).max(0.0);
    let carb_grams = round_non_negative(remaining_kcal / atwater::CARB_KCAL_PER_G);
    let carb_kcal = f64::from(carb_grams) * atwater::CARB_KCAL_PER_G;

    MacroSplit {
        protein_grams,
        fat_grams,
        carb_grams,
        protein_percent: percent_of(protein_kcal, target_calories),
        fat_percent: percent_of(fat_kcal, target_calories),
        carb_percent: percent_of(carb_kcal, target_calories),
    }
}

/// Compute a daily nutrition target using the global configuration
///
/// This is the main entry point combining BMR, TDEE, goal adjustment, and the macro split.
///
/// # Errors
///
/// Returns `ErrorCode::InvalidProfile` if the profile fails validation
pub fn compute_target(profile: &Profile) -> Result<NutritionTarget, AppError> {
    compute_target_with_config(profile, NutritionConfig::global())
}

/// Compute a daily nutrition target with explicit configuration
///
/// # Errors
///
/// Returns `ErrorCode::InvalidProfile` if the profile fails validation
pub fn compute_target_with_config(
    profile: &Profile,
    config: &NutritionConfig,
) -> Result<NutritionTarget, AppError> {
    profile.validate()?;

    // Step 1: BMR
    let bmr = calculate_mifflin_st_jeor(
        profile.weight_kg,
        profile.height_cm,
        profile.age_years,
        profile.sex,
        &config.bmr,
    );

    // Step 2: TDEE (kept unrounded for the goal step)
    let tdee = calculate_tdee(bmr, profile.activity_level, &config.activity_factors);

    // Step 3: goal-adjusted calories
    let target_calories = calculate_target_calories(tdee, profile.goal, &config.goal_adjustments);

    // Step 4: protein-priority split
    let split = calculate_macro_split(profile.weight_kg, target_calories, &config.macronutrients);

    let target = NutritionTarget {
        total_daily_energy_expenditure: round_non_negative(tdee),
        target_calories,
        protein_grams: split.protein_grams,
        fat_grams: split.fat_grams,
        carb_grams: split.carb_grams,
        protein_percent: split.protein_percent,
        fat_percent: split.fat_percent,
        carb_percent: split.carb_percent,
    };

    debug!(
        sex = %profile.sex,
        activity = %profile.activity_level,
        goal = %profile.goal,
        bmr,
        tdee = target.total_daily_energy_expenditure,
        target_calories,
        protein_g = target.protein_grams,
        fat_g = target.fat_grams,
        carb_g = target.carb_grams,
        "Computed nutrition target"
    );

    Ok(target)
}

/// Parse raw input and compute in one step
///
/// # Errors
///
/// Returns `ErrorCode::InvalidProfile` for missing, non-numeric, non-positive, or unknown fields
pub fn compute_target_from_input(
    input: ProfileInput,
    config: &NutritionConfig,
) -> Result<NutritionTarget, AppError> {
    let profile = Profile::try_from(input)?;
    compute_target_with_config(&profile, config)
}

/// Compute targets for many profiles in parallel
///
/// Results keep the input order; each profile fails or succeeds independently.
#[must_use]
pub fn compute_targets(
    profiles: &[Profile],
    config: &NutritionConfig,
) -> Vec<Result<NutritionTarget, AppError>> {
    profiles
        .par_iter()
        .map(|profile| compute_target_with_config(profile, config))
        .collect()
}
