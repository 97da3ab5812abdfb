// ABOUTME: Unified error handling re-exported from the core crate
// ABOUTME: AppError, ErrorCode, ErrorResponse, and profile validation errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Error types live in `macro-protocol-core` so that embedding layers can
//! depend on them without pulling in the engine.

pub use macro_protocol_core::errors::*;
