// ABOUTME: Application constants re-exported from the core crate
// ABOUTME: Atwater factors, service names, env variable names, and profile field names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Constants Module

pub use macro_protocol_core::constants::*;
