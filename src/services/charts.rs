// ABOUTME: Chart service producing points and summary statistics for a period
// ABOUTME: Carries the active goal's target as the goal line plus a fitted trend line
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::members::require_active_member;
use crate::errors::AppResult;
use crate::store::{GoalStore, MemberStore, RecordStore};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use whatkg_core::models::MemberId;
use whatkg_intelligence::{ChartPeriod, ChartPoint, ChartStatistics, TrendLine, WeightStatistics};

/// Chart data for one period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartView {
    /// Period shown
    pub period: ChartPeriod,
    /// Oldest-first points
    pub points: Vec<ChartPoint>,
    /// Summary, `None` when the period has no records
    pub statistics: Option<ChartStatistics>,
    /// Fitted line over the points, `None` with fewer than two
    pub trend_line: Option<TrendLine>,
}

/// Chart data for a member over `period` ending `today`
///
/// # Errors
///
/// Returns `ResourceNotFound` for unknown or removed members
pub async fn chart<S>(
    store: &S,
    member: &MemberId,
    period: ChartPeriod,
    today: NaiveDate,
) -> AppResult<ChartView>
where
    S: RecordStore + GoalStore + MemberStore + ?Sized,
{
    require_active_member(store, member).await?;
    let from = period.start_date(today).unwrap_or(NaiveDate::MIN);
    let records = store.range_ascending(member, from, today).await?;
    let goal_weight = store.active_goal(member).await?.map(|g| g.target_weight);

    let points = WeightStatistics::chart_points(&records);
    let trend_line = WeightStatistics::trend_line(&points);
    Ok(ChartView {
        period,
        points,
        statistics: WeightStatistics::chart_statistics(&records, goal_weight),
        trend_line,
    })
}
