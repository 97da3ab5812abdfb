// ABOUTME: Benchmark fixtures for generating biometric profiles
// ABOUTME: Deterministic data generation for reproducible performance measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark fixtures for generating biometric profiles.

use macro_protocol::intelligence::{ActivityLevel, Goal, Profile, Sex};

/// Predefined batch sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum ProfileBatchSize {
    /// Small batch (10 profiles)
    Small,
    /// Medium batch (1,000 profiles) - a day of calculator submissions
    Medium,
    /// Large batch (100,000 profiles)
    Large,
}

impl ProfileBatchSize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 10,
            Self::Medium => 1_000,
            Self::Large => 100_000,
        }
    }
}

/// Generate a single profile spread across the expected input domain
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
#[must_use]
pub fn generate_profile(index: usize) -> Profile {
    let sex = if index % 2 == 0 { Sex::Male } else { Sex::Female };
    let activity_level = ActivityLevel::ALL[index % ActivityLevel::ALL.len()];
    let goal = Goal::ALL[(index / 5) % Goal::ALL.len()];

    Profile {
        sex,
        age_years: 15 + ((index * 7) % 75) as u32,
        height_cm: 120.0 + ((index * 13) % 110) as f64,
        weight_kg: 35.0 + ((index * 17) % 215) as f64 + 0.5,
        activity_level,
        goal,
    }
}

/// Generate a batch of profiles
#[must_use]
pub fn generate_profiles(size: ProfileBatchSize) -> Vec<Profile> {
    (0..size.count()).map(generate_profile).collect()
}
