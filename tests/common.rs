// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, reference profiles, and environment cleanup helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `macro_protocol`

use macro_protocol::constants::env_config;
use macro_protocol::intelligence::{ActivityLevel, Goal, Profile, Sex};
use std::env;
use std::sync::Once;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Male, 30 y, 175 cm, 80 kg, light activity
pub fn reference_male(goal: Goal) -> Profile {
    Profile::new(Sex::Male, 30, 175.0, 80.0, ActivityLevel::Light, goal).unwrap()
}

/// Female, 25 y, 160 cm, 55 kg, sedentary
pub fn reference_female(goal: Goal) -> Profile {
    Profile::new(Sex::Female, 25, 160.0, 55.0, ActivityLevel::Sedentary, goal).unwrap()
}

/// Remove every engine override from the process environment
pub fn clear_nutrition_env() {
    for name in env_config::ALL {
        env::remove_var(name);
    }
}
