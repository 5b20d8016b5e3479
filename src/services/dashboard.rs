// ABOUTME: Dashboard service assembling the per-member summary view
// ABOUTME: Combines latest weight, recent trend, goal progress, recent records, and period statistics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::members::require_active_member;
use crate::errors::AppResult;
use crate::store::{GoalStore, MemberStore, RecordStore};
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;
use whatkg_core::models::{FamilyMember, Goal, MemberId, WeightObservation};
use whatkg_intelligence::{
    GoalProgress, GoalProgressCalculator, TrendAnalyzer, TrendResult, WeightStatistics, WeightStats,
};

/// Everything the dashboard shows for one member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// The member
    pub member: FamilyMember,
    /// Most recent observation
    pub latest: Option<WeightObservation>,
    /// Trend over the configured period
    pub trend: TrendResult,
    /// Active goal
    pub goal: Option<Goal>,
    /// Progress toward the active goal
    pub goal_progress: Option<GoalProgress>,
    /// Recent observations, newest first
    pub recent: Vec<WeightObservation>,
    /// Statistics over the trend period
    pub stats: Option<WeightStats>,
}

/// Build the dashboard summary for a member
///
/// The trend and statistics cover `today - period_days ..= today`.
///
/// # Errors
///
/// Returns `ResourceNotFound` for unknown or removed members
pub async fn dashboard<S>(
    store: &S,
    member_id: &MemberId,
    period_days: u32,
    recent_limit: usize,
    today: NaiveDate,
) -> AppResult<DashboardSummary>
where
    S: RecordStore + GoalStore + MemberStore + ?Sized,
{
    let member = require_active_member(store, member_id).await?;
    let from = today
        .checked_sub_days(Days::new(u64::from(period_days)))
        .unwrap_or(NaiveDate::MIN);

    let period_ascending = store.range_ascending(member_id, from, today).await?;
    let period_descending: Vec<WeightObservation> =
        period_ascending.iter().rev().cloned().collect();
    let trend = TrendAnalyzer::analyze_trend(&period_descending, period_days);
    let stats = WeightStatistics::weight_stats(&period_ascending, period_days);

    let latest = store.latest_observation(member_id).await?;
    let goal = store.active_goal(member_id).await?;
    let goal_progress = GoalProgressCalculator::progress_for(goal.as_ref(), latest.as_ref());
    let recent = store.recent_descending(member_id, recent_limit).await?;

    debug!(
        member.id = %member_id,
        trend = ?trend.trend,
        records = trend.record_count,
        "Dashboard assembled"
    );

    Ok(DashboardSummary {
        member,
        latest,
        trend,
        goal,
        goal_progress,
        recent,
        stats,
    })
}
