// ABOUTME: Output format abstraction for rendering nutrition targets
// ABOUTME: Supports a human-readable text panel and JSON for machine consumers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Output Format Abstraction Layer
//!
//! ## Supported Formats
//!
//! - **Text**: the calculator result panel (calorie headline plus macro rows)
//! - **JSON**: camelCase fields matching the engine's external interface

use crate::config::ActivityFactorsConfig;
use crate::errors::{AppError, AppResult};
use crate::intelligence::{ActivityLevel, NutritionTarget};
use crate::lead_gate::LeadGate;
use serde::Serialize;
use std::fmt::{self, Write as _};
use std::str::FromStr;

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable panel (default)
    #[default]
    Text,
    /// JSON document
    Json,
}

impl OutputFormat {
    /// Get the MIME content type for this format
    #[must_use]
    pub const fn content_type(&self) -> &'static str {
        match self {
            Self::Text => "text/plain; charset=utf-8",
            Self::Json => "application/json",
        }
    }

    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(AppError::invalid_input(format!(
                "Unknown output format: '{other}'. Valid options: text, json"
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Formatted output containing the rendered data and metadata
#[derive(Debug, Clone)]
pub struct FormattedOutput {
    /// The rendered data
    pub data: String,
    /// The format used
    pub format: OutputFormat,
    /// The MIME content type
    pub content_type: &'static str,
}

impl FormattedOutput {
    fn new(data: String, format: OutputFormat) -> Self {
        Self {
            data,
            format,
            content_type: format.content_type(),
        }
    }
}

/// Format any serializable value as pretty JSON
///
/// # Errors
///
/// Returns `AppError::serialization` if serialization fails
pub fn format_json<T: Serialize>(data: &T) -> AppResult<FormattedOutput> {
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| AppError::serialization(format!("JSON serialization failed: {e}")))?;
    Ok(FormattedOutput::new(json, OutputFormat::Json))
}

/// Render a full nutrition target
///
/// # Errors
///
/// Returns `AppError::serialization` if JSON serialization fails
pub fn format_target(target: &NutritionTarget, format: OutputFormat) -> AppResult<FormattedOutput> {
    match format {
        OutputFormat::Json => format_json(target),
        OutputFormat::Text => Ok(FormattedOutput::new(render_panel(target), format)),
    }
}

/// Render only the calorie headline for a target still behind the lead gate
///
/// # Errors
///
/// Returns `AppError::serialization` if JSON serialization fails
pub fn format_locked(target_calories: u32, format: OutputFormat) -> AppResult<FormattedOutput> {
    match format {
        OutputFormat::Json => format_json(&serde_json::json!({
            "targetCalories": target_calories,
            "locked": true,
        })),
        OutputFormat::Text => {
            let mut out = String::new();
            push_headline(&mut out, target_calories);
            out.push_str("Macro breakdown locked: submit your name and email to reveal it.\n");
            Ok(FormattedOutput::new(out, format))
        }
    }
}

/// Render a target held behind a lead gate
///
/// An unlocked gate renders the full target in either format. A locked gate
/// renders only the calorie headline as text; JSON consumers always receive
/// the full target since they own their own presentation.
///
/// # Errors
///
/// Returns `AppError::serialization` if JSON serialization fails
pub fn format_gated(gate: &LeadGate, format: OutputFormat) -> AppResult<FormattedOutput> {
    match (gate.reveal(), format) {
        (Some(revealed), _) => format_target(revealed, format),
        (None, OutputFormat::Json) => format_target(gate.computed(), format),
        (None, OutputFormat::Text) => format_locked(gate.headline_calories(), format),
    }
}

/// Render the activity tier table for a configuration
#[must_use]
pub fn format_tiers(config: &ActivityFactorsConfig) -> String {
    let mut out = String::new();
    for level in ActivityLevel::ALL {
        let _ = writeln!(
            out,
            "{:<10} x{:<6} {}",
            level.name(),
            level.multiplier(config),
            level.description()
        );
    }
    out
}

/// Thousands separator for kcal headlines, e.g. 1924 -> "1,924"
#[must_use]
pub fn group_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn push_headline(out: &mut String, target_calories: u32) {
    let _ = writeln!(out, "DAILY FUEL TARGET");
    let _ = writeln!(out, "{} KCAL", group_thousands(target_calories));
}

fn render_panel(target: &NutritionTarget) -> String {
    let mut out = String::new();
    push_headline(&mut out, target.target_calories);
    let _ = writeln!(
        out,
        "Maintenance (TDEE): {} kcal",
        group_thousands(target.total_daily_energy_expenditure)
    );
    for (label, grams, percent) in [
        ("PROTEIN", target.protein_grams, target.protein_percent),
        ("FATS", target.fat_grams, target.fat_percent),
        ("CARBS", target.carb_grams, target.carb_percent),
    ] {
        let _ = writeln!(out, "{label:<8} {grams:>5}g  {percent:>3}%");
    }
    out
}
