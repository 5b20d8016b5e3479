// ABOUTME: Configuration module for environment settings and user preferences
// ABOUTME: Splits deployment configuration from preferences persisted with user data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration for WhatKg
//!
//! - **Environment**: deployment mode, data file, and statistics defaults from environment variables
//! - **Settings**: user preferences (unit, theme, reminders) stored in the backup document

/// Environment-based application configuration
pub mod environment;
/// User preferences with typed setters
pub mod settings;

pub use environment::{AppConfig, Environment, LogLevel};
pub use settings::{AppSettings, NotificationSettings, Theme};
