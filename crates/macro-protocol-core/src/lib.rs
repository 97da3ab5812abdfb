// ABOUTME: Core types and constants for the Macro Protocol nutrition engine
// ABOUTME: Foundation crate with error handling and domain constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Macro Protocol Core
//!
//! Foundation crate providing shared types and constants for the Macro Protocol
//! nutrition engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `ProfileError`
//! - **constants**: Energy densities, service names, and environment variable names

/// Unified error handling system with standard error codes and JSON envelopes
pub mod errors;

/// Application constants organized by domain
pub mod constants;
