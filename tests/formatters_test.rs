// ABOUTME: Tests for text and JSON rendering of nutrition targets
// ABOUTME: Covers format selection, the result panel, the locked teaser, and the tier table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use macro_protocol::{
    config::NutritionConfig,
    formatters::{
        format_gated, format_locked, format_target, format_tiers, group_thousands, OutputFormat,
    },
    intelligence::{compute_target_with_config, Goal, NutritionTarget},
    lead_gate::{ContactDetails, LeadGate},
};
use serde_json::Value;

mod common;

fn computed_target() -> NutritionTarget {
    compute_target_with_config(&common::reference_male(Goal::Cut), &NutritionConfig::default())
        .unwrap()
}

#[test]
fn test_output_format_parsing() {
    assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
    assert_eq!("TEXT".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
    assert!("yaml".parse::<OutputFormat>().is_err());
    assert_eq!(OutputFormat::default(), OutputFormat::Text);
    assert_eq!(OutputFormat::Json.to_string(), "json");
}

#[test]
fn test_json_output_round_trips() {
    let target = computed_target();
    let output = format_target(&target, OutputFormat::Json).unwrap();

    assert_eq!(output.content_type, "application/json");
    let parsed: NutritionTarget = serde_json::from_str(&output.data).unwrap();
    assert_eq!(parsed, target);
}

#[test]
fn test_text_panel_contents() {
    let output = format_target(&computed_target(), OutputFormat::Text).unwrap();

    assert!(output.data.contains("DAILY FUEL TARGET"));
    assert!(output.data.contains("1,924 KCAL"));
    assert!(output.data.contains("2,405 kcal"));
    assert!(output.data.contains("PROTEIN    176g   37%"));
    assert!(output.data.contains("FATS        72g   34%"));
    assert!(output.data.contains("CARBS      143g   30%"));
}

#[test]
fn test_locked_output_hides_macros() {
    let text = format_locked(1924, OutputFormat::Text).unwrap();
    assert!(text.data.contains("1,924 KCAL"));
    assert!(!text.data.contains("PROTEIN"));

    let json: Value = serde_json::from_str(&format_locked(1924, OutputFormat::Json).unwrap().data)
        .unwrap();
    assert_eq!(json["targetCalories"], 1924);
    assert_eq!(json["locked"], true);
    assert!(json.get("proteinGrams").is_none());
}

#[test]
fn test_tier_table_lists_all_levels() {
    let table = format_tiers(&NutritionConfig::default().activity_factors);
    let lines: Vec<&str> = table.lines().collect();

    assert_eq!(lines.len(), 5);
    assert!(lines[0].starts_with("sedentary"));
    assert!(lines[3].contains("x1.725"));
    assert!(lines[4].starts_with("athlete"));
}

#[test]
fn test_group_thousands() {
    assert_eq!(group_thousands(0), "0");
    assert_eq!(group_thousands(469), "469");
    assert_eq!(group_thousands(1924), "1,924");
    assert_eq!(group_thousands(1_234_567), "1,234,567");
}

#[test]
fn test_gated_text_shows_headline_until_unlocked() {
    let mut gate = LeadGate::new(computed_target());

    let locked = format_gated(&gate, OutputFormat::Text).unwrap();
    assert_eq!(locked.data, format_locked(1924, OutputFormat::Text).unwrap().data);
    assert!(!locked.data.contains("PROTEIN"));

    gate.submit(ContactDetails::new("Bilal", "bilal@example.com"))
        .unwrap();
    let unlocked = format_gated(&gate, OutputFormat::Text).unwrap();
    assert!(unlocked.data.contains("PROTEIN    176g   37%"));
    assert!(unlocked.data.contains("CARBS      143g   30%"));
}

#[test]
fn test_gated_json_always_carries_full_target() {
    let target = computed_target();
    let mut gate = LeadGate::new(target);

    let locked = format_gated(&gate, OutputFormat::Json).unwrap();
    assert_eq!(locked.content_type, "application/json");
    let parsed: NutritionTarget = serde_json::from_str(&locked.data).unwrap();
    assert_eq!(parsed, target);

    gate.submit(ContactDetails::new("Bilal", "bilal@example.com"))
        .unwrap();
    let unlocked = format_gated(&gate, OutputFormat::Json).unwrap();
    assert_eq!(unlocked.data, locked.data);
}
