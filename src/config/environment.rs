// ABOUTME: Environment configuration for deployment mode, data file, and statistics defaults
// ABOUTME: Reads WHATKG_* variables with typed fallbacks, warning on unparseable values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration.
//!
//! Configuration comes only from environment variables. Every setting has a
//! default, so `AppConfig::from_env` never fails; [`AppConfig::validate`]
//! rejects values that parse but make no sense.

use crate::constants::defaults;
use crate::errors::{AppError, AppResult, ErrorCode};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{info, warn};
use whatkg_intelligence::WeekStart;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    #[default]
    Warn,
    /// Informational messages
    Info,
    /// Debug output
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "info" => Self::Info,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Warn,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production use
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }

    /// Check if this is a testing environment
    #[must_use]
    pub const fn is_testing(self) -> bool {
        matches!(self, Self::Testing)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Application configuration loaded from the environment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Log level used when `RUST_LOG` is unset
    pub log_level: LogLevel,
    /// Backup document the CLI loads and saves
    pub data_file: PathBuf,
    /// Trend and statistics lookback window (days)
    pub trend_period_days: u32,
    /// Number of recent records on the dashboard
    pub recent_records_limit: usize,
    /// Number of records loaded by the record list
    pub list_limit: usize,
    /// First day of the calendar week
    pub week_start: WeekStart,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            log_level: LogLevel::default(),
            data_file: PathBuf::from(defaults::DATA_FILE),
            trend_period_days: defaults::TREND_PERIOD_DAYS,
            recent_records_limit: defaults::RECENT_RECORDS_LIMIT,
            list_limit: defaults::LIST_LIMIT,
            week_start: WeekStart::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables, falling back to defaults
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let config = Self {
            environment: env::var("ENVIRONMENT")
                .map(|v| Environment::from_str_or_default(&v))
                .unwrap_or_default(),
            log_level: env::var("RUST_LOG")
                .map(|v| LogLevel::from_str_or_default(&v))
                .unwrap_or_default(),
            data_file: env::var("WHATKG_DATA_FILE")
                .map_or(defaults.data_file, PathBuf::from),
            trend_period_days: parse_env_or("WHATKG_TREND_PERIOD_DAYS", defaults.trend_period_days),
            recent_records_limit: parse_env_or(
                "WHATKG_RECENT_RECORDS_LIMIT",
                defaults.recent_records_limit,
            ),
            list_limit: parse_env_or("WHATKG_LIST_LIMIT", defaults.list_limit),
            week_start: parse_env_or("WHATKG_WEEK_START", defaults.week_start),
        };

        info!(
            environment = %config.environment,
            data_file = %config.data_file.display(),
            trend_period_days = config.trend_period_days,
            "Configuration loaded from environment"
        );
        config
    }

    /// Override the data file, e.g. from a `--data-file` flag
    #[must_use]
    pub fn with_data_file(mut self, data_file: impl Into<PathBuf>) -> Self {
        self.data_file = data_file.into();
        self
    }

    /// Reject values that parse but cannot be used
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` when a window or limit is zero
    pub fn validate(&self) -> AppResult<()> {
        let zero_setting = [
            ("WHATKG_TREND_PERIOD_DAYS", self.trend_period_days == 0),
            ("WHATKG_RECENT_RECORDS_LIMIT", self.recent_records_limit == 0),
            ("WHATKG_LIST_LIMIT", self.list_limit == 0),
        ]
        .into_iter()
        .find_map(|(name, is_zero)| is_zero.then_some(name));

        match zero_setting {
            Some(name) => Err(AppError::new(
                ErrorCode::ConfigInvalid,
                format!("{name} must be greater than zero"),
            )),
            None => Ok(()),
        }
    }
}

/// Parse an environment variable, warning and falling back on bad values
fn parse_env_or<T>(key: &str, default: T) -> T
where
    T: FromStr + fmt::Debug,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("Invalid value {raw:?} for {key}, using default {default:?}");
            default
        }),
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_parsing() {
        assert_eq!(Environment::from_str_or_default("PROD"), Environment::Production);
        assert_eq!(Environment::from_str_or_default("test"), Environment::Testing);
        assert_eq!(Environment::from_str_or_default("staging"), Environment::Development);
    }

    #[test]
    fn test_log_level_fallback() {
        assert_eq!(LogLevel::from_str_or_default("DEBUG"), LogLevel::Debug);
        assert_eq!(LogLevel::from_str_or_default("verbose"), LogLevel::Warn);
        assert_eq!(LogLevel::Trace.to_string(), "trace");
    }

    #[test]
    fn test_defaults_validate() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.trend_period_days, 30);
        assert_eq!(config.week_start, WeekStart::Sunday);
    }

    #[test]
    fn test_zero_limit_is_invalid() {
        let config = AppConfig {
            list_limit: 0,
            ..AppConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigInvalid);
        assert!(err.message.contains("WHATKG_LIST_LIMIT"));
    }
}
