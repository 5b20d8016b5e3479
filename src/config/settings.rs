// ABOUTME: User-facing preferences with typed setters for unit, theme, and reminders
// ABOUTME: Persisted inside the backup document alongside members and records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::defaults;
use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use whatkg_core::errors::ValidationError;
use whatkg_core::units::WeightUnit;

/// Color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light mode
    #[default]
    Light,
    /// Dark mode
    Dark,
    /// Follow the operating system
    System,
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "system" => Ok(Self::System),
            other => Err(format!("unknown theme: {other}")),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
            Self::System => write!(f, "system"),
        }
    }
}

/// Reminder and alert preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSettings {
    /// Remind to weigh in every day
    pub daily_reminder: bool,
    /// Reminder time of day
    pub reminder_time: NaiveTime,
    /// Alert when a goal is reached
    pub goal_achievement_alert: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            daily_reminder: true,
            reminder_time: NaiveTime::parse_from_str(defaults::REMINDER_TIME, "%H:%M")
                .unwrap_or(NaiveTime::MIN),
            goal_achievement_alert: true,
        }
    }
}

/// User preferences
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Display unit for weights
    pub unit: WeightUnit,
    /// Color theme
    pub theme: Theme,
    /// Reminder and alert preferences
    pub notifications: NotificationSettings,
    /// Last time any preference changed
    pub updated_at: Option<DateTime<Utc>>,
}

impl AppSettings {
    /// Set the display unit
    pub fn set_unit(&mut self, unit: WeightUnit, now: DateTime<Utc>) {
        self.unit = unit;
        self.updated_at = Some(now);
    }

    /// Set the color theme
    pub fn set_theme(&mut self, theme: Theme, now: DateTime<Utc>) {
        self.theme = theme;
        self.updated_at = Some(now);
    }

    /// Turn the daily reminder on or off
    pub fn set_daily_reminder(&mut self, enabled: bool, now: DateTime<Utc>) {
        self.notifications.daily_reminder = enabled;
        self.updated_at = Some(now);
    }

    /// Set the reminder time from `HH:MM`
    ///
    /// # Errors
    ///
    /// Returns `InvalidTime` when the time does not parse
    pub fn set_reminder_time(&mut self, time: &str, now: DateTime<Utc>) -> Result<(), ValidationError> {
        let parsed = NaiveTime::parse_from_str(time.trim(), "%H:%M").map_err(|_| {
            ValidationError::InvalidTime {
                field: "reminder_time",
            }
        })?;
        self.notifications.reminder_time = parsed;
        self.updated_at = Some(now);
        Ok(())
    }

    /// Turn the goal achievement alert on or off
    pub fn set_goal_achievement_alert(&mut self, enabled: bool, now: DateTime<Utc>) {
        self.notifications.goal_achievement_alert = enabled;
        self.updated_at = Some(now);
    }
}
