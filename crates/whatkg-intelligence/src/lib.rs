// ABOUTME: Weight statistics and goal engine with trend, progress, planning, and calendar logic
// ABOUTME: Every component is a pure function of explicit inputs, including "today"
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # WhatKg Intelligence
//!
//! The statistics core of the family weight tracker. Screens fetch
//! observations from a store and hand them to these components to derive
//! display values. Nothing here performs I/O, holds state, or reads the clock:
//! callers pass `today` explicitly so results are deterministic.
//!
//! ## Components
//!
//! - **`trend_analyzer`**: direction and magnitude of change over a lookback window
//! - **`goal_progress`**: completion percentage and remaining delta for the active goal
//! - **`goal_planner`**: goal type, weekly rate, healthy-rate advisory, and projection path
//! - **`calendar`**: fixed 42-cell month grid, per-cell record projection, and day status
//! - **`statistics`**: period statistics, chart statistics and trend line, and per-entry changes
//! - **`record_query`**: search, filter, and sort for the record list

/// Fixed 42-cell month grid and month view projection
pub mod calendar;
/// Goal planning, projection path, and pace-based planning
pub mod goal_planner;
/// Goal completion percentage and remaining weight
pub mod goal_progress;
/// Search, filter, and sort for the record list
pub mod record_query;
/// Period statistics, chart statistics, and per-entry changes
pub mod statistics;
/// Trend direction over a lookback window
pub mod trend_analyzer;

pub use calendar::{
    build_month_grid, CalendarCell, CellStatus, MonthGrid, MonthView, WeekStart, YearMonth,
};
pub use goal_planner::{GoalPlan, GoalPlanner, PacePlan, ProjectionPath, ProjectionPoint};
pub use goal_progress::{GoalProgress, GoalProgressCalculator, ProgressTier};
pub use record_query::{RecordFilter, RecordQuery, RecordSort};
pub use statistics::{
    ChangeDirection, ChartPeriod, ChartPoint, ChartStatistics, EntryChange, TrendLine,
    WeightStatistics, WeightStats,
};
pub use trend_analyzer::{TrendAnalyzer, TrendDirection, TrendResult};
