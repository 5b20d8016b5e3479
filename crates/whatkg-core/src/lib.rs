// ABOUTME: Core types and constants for the WhatKg family weight tracker
// ABOUTME: Foundation crate with error handling, domain models, validation, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # WhatKg Core
//!
//! Foundation crate providing shared types and constants for the WhatKg family
//! weight tracker. The statistics engine and the application crate both build
//! on it, so it is kept free of I/O.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `ValidationError`
//! - **constants**: Weight limits, trend thresholds, and planner constants
//! - **models**: Family members, weight observations, and goals
//! - **units**: Rounding and kg/lb conversion helpers
//! - **validation**: Input validation shared by services and the CLI

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`FamilyMember`, `WeightObservation`, `Goal`)
pub mod models;

/// Rounding and unit conversion helpers
pub mod units;

/// Input validation for weights, memos, names, and dates
pub mod validation;
