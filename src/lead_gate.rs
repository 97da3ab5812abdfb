// ABOUTME: Lead-capture gate that withholds a computed nutrition target until contact is given
// ABOUTME: Sequencing policy for presentation layers; the engine itself never gates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Lead Gate
//!
//! The landing page computes the target immediately but reveals the macro
//! breakdown only after the visitor submits a name and e-mail. [`LeadGate`]
//! models that as a two-state machine around an already computed
//! [`NutritionTarget`].

use crate::errors::{AppError, AppResult};
use crate::intelligence::NutritionTarget;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::info;

/// Get compiled email regex (cached)
///
/// Returns None if regex compilation fails (hardcoded pattern, never expected)
fn email_regex() -> Option<&'static Regex> {
    static EMAIL_REGEX: OnceLock<Option<Regex>> = OnceLock::new();
    EMAIL_REGEX
        .get_or_init(|| Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").ok())
        .as_ref()
}

/// Validate an e-mail address
///
/// # Errors
///
/// Returns `AppError::InvalidInput` if the address does not look like `local@domain.tld`
pub fn validate_email(email: &str) -> AppResult<()> {
    let email = email.trim();
    let valid = email_regex().map_or_else(
        || email.contains('@') && email.len() >= 3,
        |re| re.is_match(email),
    );
    if valid {
        Ok(())
    } else {
        Err(AppError::invalid_input(format!("Invalid email format: '{email}'")).with_field("email"))
    }
}

/// What the applicant most wants help with
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum MainStruggle {
    /// Low energy / brain fog
    #[default]
    LowEnergy,
    /// Stubborn belly fat
    BellyFat,
    /// Inconsistent routine between prayer and training
    InconsistentRoutine,
    /// Recovering from addiction
    AddictionRecovery,
}

impl MainStruggle {
    /// Display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::LowEnergy => "Low Energy / Fog",
            Self::BellyFat => "Belly Fat",
            Self::InconsistentRoutine => "Inconsistent Salah & Gym",
            Self::AddictionRecovery => "Addiction Recovery",
        }
    }
}

impl FromStr for MainStruggle {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "low_energy" | "fog" => Ok(Self::LowEnergy),
            "belly_fat" => Ok(Self::BellyFat),
            "inconsistent_routine" | "inconsistent" => Ok(Self::InconsistentRoutine),
            "addiction_recovery" | "addiction" => Ok(Self::AddictionRecovery),
            other => Err(AppError::invalid_input(format!(
                "Unknown struggle: '{other}'. Valid options: low_energy, belly_fat, inconsistent_routine, addiction_recovery"
            ))
            .with_field("struggle")),
        }
    }
}

/// Contact details collected by the lead form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactDetails {
    /// Full name
    pub name: String,
    /// E-mail address
    pub email: String,
    /// Main struggle, if selected
    #[serde(default)]
    pub struggle: Option<MainStruggle>,
}

impl ContactDetails {
    /// Create contact details without a struggle selection
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            struggle: None,
        }
    }

    /// Attach the applicant's main struggle
    #[must_use]
    pub const fn with_struggle(mut self, struggle: MainStruggle) -> Self {
        self.struggle = Some(struggle);
        self
    }

    /// Validate the details
    ///
    /// # Errors
    ///
    /// `MissingRequiredField` for a blank name, `InvalidInput` for a bad e-mail
    pub fn validate(&self) -> AppResult<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::missing_field("name"));
        }
        validate_email(&self.email)
    }
}

#[derive(Debug, Clone)]
enum GateState {
    Locked,
    Unlocked(ContactDetails),
}

/// Holds a computed target until valid contact details are submitted
#[derive(Debug, Clone)]
pub struct LeadGate {
    target: NutritionTarget,
    state: GateState,
}

impl LeadGate {
    /// Wrap a computed target in a locked gate
    #[must_use]
    pub const fn new(target: NutritionTarget) -> Self {
        Self {
            target,
            state: GateState::Locked,
        }
    }

    /// Submit contact details; unlocks the gate when they validate
    ///
    /// Resubmitting after unlock replaces the stored contact.
    ///
    /// # Errors
    ///
    /// Returns the validation error and leaves the gate state unchanged
    pub fn submit(&mut self, contact: ContactDetails) -> AppResult<()> {
        contact.validate()?;
        info!(
            struggle = contact.struggle.map_or("unspecified", |s| s.label()),
            target_calories = self.target.target_calories,
            "Lead captured, revealing nutrition target"
        );
        self.state = GateState::Unlocked(contact);
        Ok(())
    }

    /// Whether the target may be shown
    #[must_use]
    pub const fn is_unlocked(&self) -> bool {
        matches!(self.state, GateState::Unlocked(_))
    }

    /// The target, only once unlocked
    #[must_use]
    pub const fn reveal(&self) -> Option<&NutritionTarget> {
        match self.state {
            GateState::Unlocked(_) => Some(&self.target),
            GateState::Locked => None,
        }
    }

    /// Contact details that unlocked the gate
    #[must_use]
    pub const fn contact(&self) -> Option<&ContactDetails> {
        match &self.state {
            GateState::Unlocked(contact) => Some(contact),
            GateState::Locked => None,
        }
    }

    /// The computed target regardless of gate state, for machine consumers
    pub(crate) const fn computed(&self) -> &NutritionTarget {
        &self.target
    }

    /// Daily calorie headline, always visible as the teaser
    #[must_use]
    pub const fn headline_calories(&self) -> u32 {
        self.target.target_calories
    }

    /// Consume the gate, returning the target if unlocked or the gate itself otherwise
    ///
    /// # Errors
    ///
    /// Returns the still-locked gate
    pub fn into_revealed(self) -> Result<NutritionTarget, Self> {
        if self.is_unlocked() {
            Ok(self.target)
        } else {
            Err(self)
        }
    }
}
