// ABOUTME: Application error types re-exported from the core crate
// ABOUTME: Keeps crate::errors paths stable for services, stores, and binaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Unified error handling
//!
//! The types live in `whatkg-core` so the statistics engine can use them
//! without depending on this crate.

pub use whatkg_core::errors::{AppError, AppResult, ErrorCode, ErrorContext, ValidationError};
