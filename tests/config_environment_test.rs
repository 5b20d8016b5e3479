// ABOUTME: Unit tests for environment configuration loading
// ABOUTME: Validates defaults, overrides, fallbacks on bad values, and validation errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use serial_test::serial;
use std::env;
use std::path::PathBuf;
use whatkg::config::{AppConfig, Environment, LogLevel};
use whatkg::errors::ErrorCode;
use whatkg::intelligence::WeekStart;

const VARS: [&str; 6] = [
    "ENVIRONMENT",
    "WHATKG_DATA_FILE",
    "WHATKG_TREND_PERIOD_DAYS",
    "WHATKG_RECENT_RECORDS_LIMIT",
    "WHATKG_LIST_LIMIT",
    "WHATKG_WEEK_START",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
fn test_log_level_parsing() {
    assert_eq!(LogLevel::from_str_or_default("error"), LogLevel::Error);
    assert_eq!(LogLevel::from_str_or_default("Debug"), LogLevel::Debug);
    assert_eq!(LogLevel::from_str_or_default("trace"), LogLevel::Trace);
    assert_eq!(LogLevel::from_str_or_default("invalid"), LogLevel::Warn);
}

#[test]
fn test_environment_parsing() {
    assert_eq!(
        Environment::from_str_or_default("production"),
        Environment::Production
    );
    assert_eq!(
        Environment::from_str_or_default("invalid"),
        Environment::Development
    );
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();
    let config = AppConfig::from_env();
    assert_eq!(config.data_file, PathBuf::from("./data/whatkg.json"));
    assert_eq!(config.trend_period_days, 30);
    assert_eq!(config.recent_records_limit, 10);
    assert_eq!(config.list_limit, 200);
    assert_eq!(config.week_start, WeekStart::Sunday);
    config.validate().unwrap();
}

#[test]
#[serial]
fn test_environment_overrides() {
    clear_env();
    env::set_var("WHATKG_DATA_FILE", "/tmp/family.json");
    env::set_var("WHATKG_TREND_PERIOD_DAYS", "14");
    env::set_var("WHATKG_WEEK_START", "monday");

    let config = AppConfig::from_env();
    assert_eq!(config.data_file, PathBuf::from("/tmp/family.json"));
    assert_eq!(config.trend_period_days, 14);
    assert_eq!(config.week_start, WeekStart::Monday);
    clear_env();
}

#[test]
#[serial]
fn test_unparseable_values_fall_back() {
    clear_env();
    env::set_var("WHATKG_TREND_PERIOD_DAYS", "a month");
    env::set_var("WHATKG_WEEK_START", "friday");

    let config = AppConfig::from_env();
    assert_eq!(config.trend_period_days, 30);
    assert_eq!(config.week_start, WeekStart::Sunday);
    clear_env();
}

#[test]
#[serial]
fn test_zero_limit_fails_validation() {
    clear_env();
    env::set_var("WHATKG_LIST_LIMIT", "0");

    let err = AppConfig::from_env().validate().unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigInvalid);
    clear_env();
}
