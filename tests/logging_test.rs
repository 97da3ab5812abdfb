// ABOUTME: Tests for logging configuration and filter construction
// ABOUTME: Covers environment parsing, format selection, and RUST_LOG directive handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use macro_protocol::logging::{LogFormat, LoggingConfig};
use serial_test::serial;
use std::env;

const LOGGING_VARS: [&str; 7] = [
    "RUST_LOG",
    "LOG_FORMAT",
    "ENVIRONMENT",
    "LOG_INCLUDE_LOCATION",
    "LOG_INCLUDE_SPANS",
    "SERVICE_NAME",
    "SERVICE_VERSION",
];

fn clear_logging_env() {
    for name in LOGGING_VARS {
        env::remove_var(name);
    }
}

fn directives(config: &LoggingConfig) -> Vec<String> {
    config
        .env_filter()
        .to_string()
        .split(',')
        .map(str::to_owned)
        .collect()
}

#[test]
fn test_default_logging_config() {
    let config = LoggingConfig::default();

    assert_eq!(config.level, "warn");
    assert_eq!(config.format, LogFormat::Compact);
    assert_eq!(config.environment, "development");
    assert_eq!(config.service_name, "macro-protocol");
    assert!(!config.include_location);
    assert!(!config.include_spans);
}

#[test]
#[serial]
fn test_from_env_without_variables() {
    clear_logging_env();

    let config = LoggingConfig::from_env();

    assert_eq!(config.level, "warn");
    assert_eq!(config.format, LogFormat::Compact);
    assert!(!config.include_location);
}

#[test]
#[serial]
fn test_from_env_format_selection() {
    clear_logging_env();

    for (raw, expected) in [
        ("json", LogFormat::Json),
        ("pretty", LogFormat::Pretty),
        ("compact", LogFormat::Compact),
        ("yaml", LogFormat::Compact),
    ] {
        env::set_var("LOG_FORMAT", raw);
        assert_eq!(LoggingConfig::from_env().format, expected, "LOG_FORMAT={raw}");
    }

    clear_logging_env();
}

#[test]
#[serial]
fn test_production_includes_location() {
    clear_logging_env();
    env::set_var("ENVIRONMENT", "production");
    env::set_var("RUST_LOG", "debug");
    env::set_var("SERVICE_NAME", "calculator-test");

    let config = LoggingConfig::from_env();
    clear_logging_env();

    assert_eq!(config.environment, "production");
    assert_eq!(config.level, "debug");
    assert_eq!(config.service_name, "calculator-test");
    assert!(config.include_location);
}

#[test]
#[serial]
fn test_include_flags_from_env() {
    clear_logging_env();
    env::set_var("LOG_INCLUDE_LOCATION", "1");
    env::set_var("LOG_INCLUDE_SPANS", "1");

    let config = LoggingConfig::from_env();
    clear_logging_env();

    assert_eq!(config.environment, "development");
    assert!(config.include_location);
    assert!(config.include_spans);
}

#[test]
fn test_with_level_overrides_level() {
    let config = LoggingConfig::default().with_level("debug");
    assert_eq!(config.level, "debug");
    assert_eq!(config.format, LogFormat::Compact);
}

#[test]
#[serial]
fn test_multi_directive_rust_log_keeps_global_level() {
    clear_logging_env();
    env::set_var("RUST_LOG", "info,hyper=warn");

    let config = LoggingConfig::from_env();
    let filter = directives(&config);
    clear_logging_env();

    assert!(filter.iter().any(|d| d == "info"), "filter was {filter:?}");
    assert!(filter.iter().any(|d| d == "hyper=warn"), "filter was {filter:?}");
    assert!(!filter.iter().any(|d| d == "warn"), "filter was {filter:?}");
}

#[test]
#[serial]
fn test_verbose_level_raises_crate_target() {
    clear_logging_env();

    let config = LoggingConfig::from_env().with_level("debug");
    let filter = directives(&config);

    assert!(filter.iter().any(|d| d == "debug"), "filter was {filter:?}");
    assert!(
        filter.iter().any(|d| d == "macro_protocol=debug"),
        "filter was {filter:?}"
    );
}

#[test]
#[serial]
fn test_verbose_level_on_top_of_rust_log() {
    clear_logging_env();
    env::set_var("RUST_LOG", "error,hyper=warn");

    let config = LoggingConfig::from_env().with_level("debug");
    let filter = directives(&config);
    clear_logging_env();

    assert!(filter.iter().any(|d| d == "error"), "filter was {filter:?}");
    assert!(
        filter.iter().any(|d| d == "macro_protocol=debug"),
        "filter was {filter:?}"
    );
}
