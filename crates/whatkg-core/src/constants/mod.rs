// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Weight limits, trend thresholds, planner rates, and application defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped by the component that owns them so that thresholds
//! used by the statistics engine live next to each other.

/// Input limits for weights and free text
pub mod limits {
    /// Observations must be strictly below this weight (kg)
    pub const MAX_OBSERVATION_WEIGHT_KG: f64 = 1000.0;

    /// Goal weights may be equal to this weight (kg)
    pub const MAX_GOAL_WEIGHT_KG: f64 = 1000.0;

    /// Maximum memo length in characters
    pub const MAX_MEMO_CHARS: usize = 100;

    /// Maximum member display name length in characters
    pub const MAX_MEMBER_NAME_CHARS: usize = 50;
}

/// Trend classification thresholds
pub mod trend {
    /// Change (kg) above which a trend is `increasing`, below whose negation it is `decreasing`
    pub const STABLE_BAND_KG: f64 = 0.5;

    /// Minimum number of records needed to classify a trend
    pub const MIN_RECORDS_FOR_TREND: usize = 2;

    /// Per-entry change (kg) beyond which list entries are marked as increase/decrease
    pub const ENTRY_CHANGE_THRESHOLD_KG: f64 = 0.1;
}

/// Goal planning constants
pub mod planner {
    /// Half-width of the `maintain` dead-zone around zero change (kg)
    pub const MAINTAIN_DEAD_ZONE_KG: f64 = 0.5;

    /// Lower bound of a healthy weekly change as a fraction of body weight
    pub const HEALTHY_WEEKLY_MIN_FRACTION: f64 = 0.005;

    /// Upper bound of a healthy weekly change as a fraction of body weight
    pub const HEALTHY_WEEKLY_MAX_FRACTION: f64 = 0.01;

    /// Planning horizons shorter than this many weeks are treated as this many
    pub const MIN_PLANNING_WEEKS: f64 = 1.0;

    /// Maximum number of weeks plotted by the projection path
    pub const MAX_PROJECTION_WEEKS: u32 = 12;

    /// Slowest weekly pace accepted by the pace planner (kg/week)
    pub const MIN_WEEKLY_PACE_KG: f64 = 0.1;

    /// Fastest weekly pace accepted by the pace planner (kg/week)
    pub const MAX_WEEKLY_PACE_KG: f64 = 1.0;

    /// Pace-planned targets must be within this distance of the current weight (kg)
    pub const MAX_PACE_TARGET_DISTANCE_KG: f64 = 20.0;

    /// Days in a week
    pub const DAYS_PER_WEEK: f64 = 7.0;
}

/// Goal progress tiers
pub mod progress {
    /// Percentage at which a goal is considered nearly reached
    pub const NEARLY_THERE_PERCENT: f64 = 80.0;

    /// Percentage at which a goal is considered half done
    pub const HALFWAY_PERCENT: f64 = 50.0;
}

/// Calendar layout constants
pub mod calendar {
    /// Number of cells in a month grid (6 rows x 7 columns)
    pub const GRID_CELLS: usize = 42;

    /// Number of days in a grid row
    pub const DAYS_PER_ROW: usize = 7;
}

/// Application defaults shared by configuration and services
pub mod defaults {
    /// Default trend lookback window (days)
    pub const TREND_PERIOD_DAYS: u32 = 30;

    /// Number of recent records shown on the dashboard
    pub const RECENT_RECORDS_LIMIT: usize = 10;

    /// Number of records loaded by the record list
    pub const LIST_LIMIT: usize = 200;

    /// Default data file path for the CLI
    pub const DATA_FILE: &str = "./data/whatkg.json";

    /// Backup document format version
    pub const BACKUP_VERSION: u32 = 1;

    /// Default daily reminder time
    pub const REMINDER_TIME: &str = "08:00";
}

/// Service names used in structured logs
pub mod service_names {
    /// The WhatKg application
    pub const WHATKG: &str = "whatkg";
}
