// ABOUTME: Criterion benchmarks for the nutrition target engine
// ABOUTME: Measures single-profile computation, input parsing, and parallel batches
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the nutrition target engine.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

mod common;

use common::fixtures::{generate_profile, generate_profiles, ProfileBatchSize};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use macro_protocol::config::NutritionConfig;
use macro_protocol::intelligence::{
    calculate_macro_split, compute_target_from_input, compute_target_with_config, compute_targets,
    ProfileInput,
};
use serde_json::json;

fn bench_compute_target(c: &mut Criterion) {
    let config = NutritionConfig::default();
    let profile = generate_profile(0);

    c.bench_function("compute_target", |b| {
        b.iter(|| compute_target_with_config(black_box(&profile), black_box(&config)));
    });

    c.bench_function("calculate_macro_split", |b| {
        b.iter(|| {
            calculate_macro_split(
                black_box(80.0),
                black_box(1924),
                black_box(&config.macronutrients),
            )
        });
    });
}

fn bench_compute_from_input(c: &mut Criterion) {
    let config = NutritionConfig::default();
    let raw = json!({
        "sex": "male",
        "ageYears": "30",
        "heightCm": "175",
        "weightKg": "80",
        "activityLevel": "light",
        "goal": "cut"
    });

    c.bench_function("compute_target_from_input", |b| {
        b.iter(|| {
            let input: Option<ProfileInput> = serde_json::from_value(black_box(raw.clone())).ok();
            input.map(|input| compute_target_from_input(input, &config))
        });
    });
}

fn bench_batch(c: &mut Criterion) {
    let config = NutritionConfig::default();
    let mut group = c.benchmark_group("compute_targets");

    for size in [
        ProfileBatchSize::Small,
        ProfileBatchSize::Medium,
        ProfileBatchSize::Large,
    ] {
        let profiles = generate_profiles(size);
        group.throughput(Throughput::Elements(profiles.len() as u64));

        group.bench_with_input(
            BenchmarkId::new("parallel", profiles.len()),
            &profiles,
            |b, profiles| {
                b.iter(|| compute_targets(black_box(profiles), &config));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("sequential", profiles.len()),
            &profiles,
            |b, profiles| {
                b.iter(|| {
                    profiles
                        .iter()
                        .map(|profile| compute_target_with_config(profile, &config))
                        .filter(Result::is_ok)
                        .count()
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_compute_target,
    bench_compute_from_input,
    bench_batch,
);
criterion_main!(benches);
