// ABOUTME: Subcommand implementations for the macro-protocol CLI
// ABOUTME: Builds a profile input, computes the target, and gates the macro breakdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::CalculateArgs;
use macro_protocol::config::NutritionConfig;
use macro_protocol::errors::{AppError, AppResult};
use macro_protocol::formatters::{format_gated, format_tiers, OutputFormat};
use macro_protocol::intelligence::{compute_target_from_input, ProfileInput};
use macro_protocol::lead_gate::{ContactDetails, LeadGate, MainStruggle};
use serde_json::Value;
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use tracing::debug;

/// `calculate` subcommand
pub fn calculate(args: CalculateArgs) -> AppResult<()> {
    let format: OutputFormat = args.format.parse()?;
    let input = match args.input.as_deref() {
        Some(path) => read_profile_input(path)?,
        None => ProfileInput {
            sex: args.sex.map(Value::String),
            age_years: args.age.map(Value::String),
            height_cm: args.height.map(Value::String),
            weight_kg: args.weight.map(Value::String),
            activity_level: args.activity.map(Value::String),
            goal: args.goal.map(Value::String),
        },
    };

    let target = compute_target_from_input(input, NutritionConfig::global())?;
    let mut gate = LeadGate::new(target);

    if let (Some(name), Some(email)) = (args.name, args.email) {
        let mut contact = ContactDetails::new(name, email);
        if let Some(struggle) = args.struggle {
            contact = contact.with_struggle(struggle.parse::<MainStruggle>()?);
        }
        gate.submit(contact)?;
    }

    let output = format_gated(&gate, format)?;

    debug!(
        format = %output.format,
        unlocked = gate.is_unlocked(),
        "Rendered nutrition target"
    );
    print!("{}", output.data);
    if output.format == OutputFormat::Json {
        println!();
    }
    Ok(())
}

/// `tiers` subcommand
pub fn tiers() -> AppResult<()> {
    let config = NutritionConfig::global();
    print!("{}", format_tiers(&config.activity_factors));
    Ok(())
}

fn read_profile_input(path: &Path) -> AppResult<ProfileInput> {
    let raw = if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).map_err(|e| {
            AppError::invalid_input(format!("Failed to read stdin: {e}")).with_source(e)
        })?;
        buf
    } else {
        fs::read_to_string(path).map_err(|e| {
            AppError::invalid_input(format!("Failed to read {}: {e}", path.display()))
                .with_source(e)
        })?
    };
    Ok(serde_json::from_str(&raw)?)
}
