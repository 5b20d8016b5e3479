// ABOUTME: Service layer composing the stores with the statistics engine
// ABOUTME: Each service loads observations through store traits and hands them to pure components
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Service layer
//!
//! Services are free async functions generic over the store traits. They
//! validate inputs, fetch observations with an explicit ordering, and pass
//! them to the pure components in `whatkg-intelligence`. "Today" is always
//! a parameter.

/// Month calendar view with per-day observations
pub mod calendar;

/// Chart points and chart statistics for a period
pub mod charts;

/// Dashboard summary: latest weight, trend, goal progress, recent records
pub mod dashboard;

/// Goal planning, setting, progress, and history
pub mod goals;

/// Family member management
pub mod members;

/// Weight record entry, editing, and list queries
pub mod records;

pub use charts::ChartView;
pub use dashboard::DashboardSummary;
pub use goals::GoalStatus;
pub use records::RecordListEntry;
