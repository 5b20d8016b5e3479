// ABOUTME: Goal service planning, setting, clearing, and reporting member weight goals
// ABOUTME: The latest observation is the current weight for every plan and progress figure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::members::require_active_member;
use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;
use crate::store::{GoalStore, MemberStore, RecordStore};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;
use whatkg_core::models::{Goal, MemberId};
use whatkg_intelligence::{GoalPlan, GoalPlanner, GoalProgress, GoalProgressCalculator, PacePlan};

/// Active goal with its progress
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalStatus {
    /// The active goal, if one is set
    pub goal: Option<Goal>,
    /// Progress toward it, when there is also a recorded weight
    pub progress: Option<GoalProgress>,
}

async fn current_weight<S>(store: &S, member: &MemberId) -> AppResult<f64>
where
    S: RecordStore + ?Sized,
{
    store
        .latest_observation(member)
        .await?
        .map(|o| o.weight)
        .ok_or_else(|| {
            AppError::invalid_input("record a weight before planning a goal")
                .with_member_id(member.as_str())
        })
}

/// Plan a goal from the member's latest weight without saving it
///
/// # Errors
///
/// Returns `ResourceNotFound` for unknown members, `InvalidInput` when nothing
/// was recorded yet, and a validation error for bad targets
pub async fn plan_goal<S>(
    store: &S,
    member: &MemberId,
    target_weight: f64,
    target_date: NaiveDate,
    today: NaiveDate,
) -> AppResult<GoalPlan>
where
    S: RecordStore + MemberStore + ?Sized,
{
    require_active_member(store, member).await?;
    let current = current_weight(store, member).await?;
    Ok(GoalPlanner::plan_goal(
        current,
        target_weight,
        target_date,
        today,
    )?)
}

/// Plan a goal and store it as the member's active goal
///
/// A previously active goal is superseded and stays in the history.
///
/// # Errors
///
/// Same as [`plan_goal`]
pub async fn set_goal<S>(
    store: &S,
    member: &MemberId,
    target_weight: f64,
    target_date: NaiveDate,
    today: NaiveDate,
) -> AppResult<(Goal, GoalPlan)>
where
    S: RecordStore + GoalStore + MemberStore + ?Sized,
{
    let plan = plan_goal(store, member, target_weight, target_date, today).await?;
    let goal = store.set_goal(member, plan.to_new_goal()).await?;
    info!(
        member.id = %member,
        goal.id = %goal.id,
        goal.goal_type = %goal.goal_type,
        goal.weekly_target = plan.weekly_target,
        healthy = plan.is_healthy_goal,
        "Goal set"
    );
    AppLogger::log_data_change(member.as_str(), "goal", "create", &goal.id.to_string());
    Ok((goal, plan))
}

/// Plan by weekly pace instead of a target date
///
/// # Errors
///
/// Returns `ResourceNotFound` for unknown members, `InvalidInput` when nothing
/// was recorded yet, and a validation error for bad targets or paces
pub async fn pace_plan<S>(
    store: &S,
    member: &MemberId,
    target_weight: f64,
    weekly_pace: f64,
    today: NaiveDate,
) -> AppResult<PacePlan>
where
    S: RecordStore + MemberStore + ?Sized,
{
    require_active_member(store, member).await?;
    let current = current_weight(store, member).await?;
    Ok(GoalPlanner::plan_by_pace(
        current,
        target_weight,
        weekly_pace,
        today,
    )?)
}

/// Active goal and progress against the latest observation
///
/// # Errors
///
/// Returns `ResourceNotFound` for unknown members
pub async fn goal_status<S>(store: &S, member: &MemberId) -> AppResult<GoalStatus>
where
    S: RecordStore + GoalStore + MemberStore + ?Sized,
{
    require_active_member(store, member).await?;
    let goal = store.active_goal(member).await?;
    let latest = store.latest_observation(member).await?;
    let progress = GoalProgressCalculator::progress_for(goal.as_ref(), latest.as_ref());
    Ok(GoalStatus { goal, progress })
}

/// Deactivate the member's active goal
///
/// # Errors
///
/// Returns `ResourceNotFound` for unknown members or when no goal is active
pub async fn clear_goal<S>(store: &S, member: &MemberId) -> AppResult<Goal>
where
    S: GoalStore + MemberStore + ?Sized,
{
    require_active_member(store, member).await?;
    let goal = store
        .clear_goal(member)
        .await?
        .ok_or_else(|| AppError::not_found("active goal").with_member_id(member.as_str()))?;
    AppLogger::log_data_change(member.as_str(), "goal", "deactivate", &goal.id.to_string());
    Ok(goal)
}

/// Every goal the member set, newest first
///
/// # Errors
///
/// Returns `ResourceNotFound` for unknown members
pub async fn goal_history<S>(store: &S, member: &MemberId) -> AppResult<Vec<Goal>>
where
    S: GoalStore + MemberStore + ?Sized,
{
    require_active_member(store, member).await?;
    Ok(store.goal_history(member).await?)
}
