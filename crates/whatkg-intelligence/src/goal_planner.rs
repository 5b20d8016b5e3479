// ABOUTME: Goal planner deriving goal type, weekly rate, healthy advisory, and projection path
// ABOUTME: Supports date-based plans and pace-based plans that estimate a completion date
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Goal planning.
//!
//! A plan is computed from the current weight, a target weight and either a
//! target date ([`GoalPlanner::plan_goal`]) or a chosen weekly pace
//! ([`GoalPlanner::plan_by_pace`]). The healthy-rate check is advisory: an
//! unhealthy plan is still returned, flagged with `is_healthy_goal = false`.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::debug;
use whatkg_core::constants::planner::{
    DAYS_PER_WEEK, HEALTHY_WEEKLY_MAX_FRACTION, HEALTHY_WEEKLY_MIN_FRACTION,
    MAINTAIN_DEAD_ZONE_KG, MAX_PACE_TARGET_DISTANCE_KG, MAX_PROJECTION_WEEKS, MIN_PLANNING_WEEKS,
};
use whatkg_core::errors::ValidationError;
use whatkg_core::models::{GoalType, NewGoal};
use whatkg_core::units::{compare_to_band, round_one_decimal};
use whatkg_core::validation::{validate_future_date, validate_goal_weight, validate_weekly_pace};

/// Result of planning a goal against a target date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalPlan {
    /// Weight the plan starts from (kg)
    pub current_weight: f64,
    /// Weight the plan ends at (kg)
    pub target_weight: f64,
    /// Date the target should be reached by
    pub target_date: NaiveDate,
    /// `target - current` (kg, signed)
    pub required_change: f64,
    /// Whole days between today and the target date
    pub estimated_days: i64,
    /// Midpoint of the healthy weekly range (kg/week)
    pub weekly_recommended: f64,
    /// Whether the weekly target lies in the healthy range
    pub is_healthy_goal: bool,
    /// Classified direction
    pub goal_type: GoalType,
    /// Required weekly change (kg/week, never negative)
    pub weekly_target: f64,
}

impl GoalPlan {
    /// Week-by-week projection from the current weight toward the target
    #[must_use]
    pub fn projection(&self) -> ProjectionPath {
        ProjectionPath::new(self.current_weight, self.required_change, self.weekly_target)
    }

    /// Goal creation input for storing this plan
    #[must_use]
    pub const fn to_new_goal(&self) -> NewGoal {
        NewGoal {
            start_weight: self.current_weight,
            target_weight: self.target_weight,
            target_date: self.target_date,
            goal_type: self.goal_type,
            weekly_target: self.weekly_target,
        }
    }
}

/// Result of planning a goal against a chosen weekly pace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PacePlan {
    /// `target - current` (kg, signed)
    pub required_change: f64,
    /// Classified direction
    pub goal_type: GoalType,
    /// Chosen weekly pace (kg/week)
    pub weekly_pace: f64,
    /// Days needed at the chosen pace
    pub estimated_days: i64,
    /// `today + estimated_days`
    pub estimated_date: NaiveDate,
    /// Midpoint of the healthy weekly range (kg/week)
    pub weekly_recommended: f64,
    /// Whether the pace lies in the healthy range
    pub is_healthy_goal: bool,
}

/// One point of a projection path
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    /// Weeks from today
    pub week: u32,
    /// Projected weight at that week, one decimal (kg)
    pub projected_weight: f64,
}

/// Lazy, finite projection of weekly weights.
///
/// Yields weeks `0..=min(12, ceil(|change| / rate))`, moving `rate` kg per
/// week toward the target and never past it. Clone the path (or call
/// [`GoalPlan::projection`] again) to restart it.
#[derive(Debug, Clone)]
pub struct ProjectionPath {
    start: f64,
    change: f64,
    rate: f64,
    next_week: u32,
    last_week: u32,
}

impl ProjectionPath {
    /// Build a path from `start`, a signed `change` and a non-negative weekly `rate`
    #[must_use]
    // Week count is clamped to [0, MAX_PROJECTION_WEEKS] before the cast
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn new(start: f64, change: f64, rate: f64) -> Self {
        let last_week = if change == 0.0 || rate <= 0.0 || !rate.is_finite() {
            0
        } else {
            (change.abs() / rate).ceil().min(f64::from(MAX_PROJECTION_WEEKS)) as u32
        };

        Self {
            start,
            change,
            rate,
            next_week: 0,
            last_week,
        }
    }

    /// Last week this path yields
    #[must_use]
    pub const fn last_week(&self) -> u32 {
        self.last_week
    }

    fn weight_at(&self, week: u32) -> f64 {
        if week == 0 {
            return round_one_decimal(self.start);
        }
        let moved = (self.rate * f64::from(week)).min(self.change.abs());
        round_one_decimal(moved.mul_add(self.change.signum(), self.start))
    }
}

impl Iterator for ProjectionPath {
    type Item = ProjectionPoint;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_week > self.last_week {
            return None;
        }
        let week = self.next_week;
        self.next_week += 1;
        Some(ProjectionPoint {
            week,
            projected_weight: self.weight_at(week),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.last_week + 1).saturating_sub(self.next_week) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ProjectionPath {}

/// Goal planner
pub struct GoalPlanner;

impl GoalPlanner {
    /// Validate planner inputs.
    ///
    /// # Errors
    ///
    /// Returns a field-tagged error when either weight is outside `(0, 1000]`
    /// or the target date is not strictly after `today`
    pub fn validate_goal_input(
        current_weight: f64,
        target_weight: f64,
        target_date: NaiveDate,
        today: NaiveDate,
    ) -> Result<(), ValidationError> {
        validate_goal_weight("current_weight", current_weight)?;
        validate_goal_weight("target_weight", target_weight)?;
        validate_future_date("target_date", target_date, today)?;
        Ok(())
    }

    /// Classify a signed change with the maintain dead-zone, edges included
    #[must_use]
    pub fn classify(required_change: f64) -> GoalType {
        match compare_to_band(required_change, MAINTAIN_DEAD_ZONE_KG) {
            Ordering::Greater => GoalType::Gain,
            Ordering::Less => GoalType::Lose,
            Ordering::Equal => GoalType::Maintain,
        }
    }

    /// Healthy weekly range `(min, max)` for a body weight (kg/week)
    #[must_use]
    pub fn healthy_range(current_weight: f64) -> (f64, f64) {
        (
            current_weight * HEALTHY_WEEKLY_MIN_FRACTION,
            current_weight * HEALTHY_WEEKLY_MAX_FRACTION,
        )
    }

    /// Whether a weekly rate lies in the healthy range for a body weight
    #[must_use]
    pub fn is_healthy_rate(current_weight: f64, weekly_rate: f64) -> bool {
        let (min, max) = Self::healthy_range(current_weight);
        (min..=max).contains(&weekly_rate)
    }

    /// Plan a goal that should be reached by `target_date`.
    ///
    /// # Errors
    ///
    /// Returns the first failing input per [`Self::validate_goal_input`]
    pub fn plan_goal(
        current_weight: f64,
        target_weight: f64,
        target_date: NaiveDate,
        today: NaiveDate,
    ) -> Result<GoalPlan, ValidationError> {
        Self::validate_goal_input(current_weight, target_weight, target_date, today)?;

        let required_change = target_weight - current_weight;
        let goal_type = Self::classify(required_change);
        let days_diff = (target_date - today).num_days();
        #[allow(clippy::cast_precision_loss)]
        let weeks_diff = (days_diff as f64 / DAYS_PER_WEEK).max(MIN_PLANNING_WEEKS);
        let weekly_target = required_change.abs() / weeks_diff;

        let (healthy_min, healthy_max) = Self::healthy_range(current_weight);
        let is_healthy_goal = Self::is_healthy_rate(current_weight, weekly_target);

        debug!(
            goal_type = %goal_type,
            required_change,
            days_diff,
            weekly_target,
            is_healthy_goal,
            "Planned goal"
        );

        Ok(GoalPlan {
            current_weight,
            target_weight,
            target_date,
            required_change,
            estimated_days: days_diff,
            weekly_recommended: (healthy_min + healthy_max) / 2.0,
            is_healthy_goal,
            goal_type,
            weekly_target,
        })
    }

    /// Plan a goal by a chosen weekly pace and estimate its completion date.
    ///
    /// # Errors
    ///
    /// Returns an error when a weight is outside `(0, 1000]`, the target is
    /// more than 20 kg from the current weight, or the pace is outside
    /// `[0.1, 1.0]` kg/week
    pub fn plan_by_pace(
        current_weight: f64,
        target_weight: f64,
        weekly_pace: f64,
        today: NaiveDate,
    ) -> Result<PacePlan, ValidationError> {
        validate_goal_weight("current_weight", current_weight)?;
        validate_goal_weight("target_weight", target_weight)?;
        let min_target = current_weight - MAX_PACE_TARGET_DISTANCE_KG;
        let max_target = current_weight + MAX_PACE_TARGET_DISTANCE_KG;
        if !(min_target..=max_target).contains(&target_weight) {
            return Err(ValidationError::OutOfRange {
                field: "target_weight",
                min: min_target,
                max: max_target,
                value: target_weight,
            });
        }
        validate_weekly_pace(weekly_pace)?;

        let required_change = target_weight - current_weight;
        let days = (required_change.abs() / weekly_pace * DAYS_PER_WEEK).ceil();
        // Bounded by 20 kg at 0.1 kg/week, so the value fits comfortably
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let estimated_days = days as u64;
        #[allow(clippy::cast_possible_wrap)]
        let estimated_days_signed = estimated_days as i64;
        let estimated_date = today
            .checked_add_days(Days::new(estimated_days))
            .ok_or(ValidationError::InvalidDate {
                field: "estimated_date",
            })?;

        let (healthy_min, healthy_max) = Self::healthy_range(current_weight);

        Ok(PacePlan {
            required_change,
            goal_type: Self::classify(required_change),
            weekly_pace,
            estimated_days: estimated_days_signed,
            estimated_date,
            weekly_recommended: (healthy_min + healthy_max) / 2.0,
            is_healthy_goal: Self::is_healthy_rate(current_weight, weekly_pace),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        "2024-07-25".parse().unwrap()
    }

    fn in_days(days: u64) -> NaiveDate {
        today().checked_add_days(Days::new(days)).unwrap()
    }

    #[test]
    fn test_dead_zone_classification() {
        let plan = |target| GoalPlanner::plan_goal(70.0, target, in_days(70), today()).unwrap();
        assert_eq!(plan(70.3).goal_type, GoalType::Maintain);
        assert_eq!(plan(70.5).goal_type, GoalType::Maintain);
        assert_eq!(plan(70.6).goal_type, GoalType::Gain);
        assert_eq!(plan(69.4).goal_type, GoalType::Lose);
        assert_eq!(GoalPlanner::classify(64.4 - 63.9), GoalType::Maintain);
        assert_eq!(GoalPlanner::classify(63.9 - 64.4), GoalType::Maintain);
    }

    #[test]
    fn test_short_horizon_uses_one_week_minimum() {
        let plan = GoalPlanner::plan_goal(70.0, 69.0, in_days(3), today()).unwrap();
        assert!((plan.weekly_target - 1.0).abs() < 1e-9);
        assert_eq!(plan.estimated_days, 3);
        assert!(!plan.is_healthy_goal);
    }

    #[test]
    fn test_healthy_advisory() {
        // 4 kg over 8 weeks at 80 kg: 0.5 kg/week within [0.4, 0.8]
        let plan = GoalPlanner::plan_goal(80.0, 76.0, in_days(56), today()).unwrap();
        assert!((plan.weekly_target - 0.5).abs() < 1e-9);
        assert!(plan.is_healthy_goal);
        assert!((plan.weekly_recommended - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_validation_cites_field() {
        let err = GoalPlanner::plan_goal(70.0, 69.0, today(), today()).unwrap_err();
        assert_eq!(err.field(), "target_date");

        let err = GoalPlanner::plan_goal(0.0, 69.0, in_days(10), today()).unwrap_err();
        assert_eq!(err.field(), "current_weight");

        let err = GoalPlanner::plan_goal(70.0, 1000.5, in_days(10), today()).unwrap_err();
        assert_eq!(err.field(), "target_weight");

        assert!(GoalPlanner::plan_goal(70.0, 1000.0, in_days(10), today()).is_ok());
    }

    #[test]
    fn test_projection_reaches_target() {
        let plan = GoalPlanner::plan_goal(70.0, 68.0, in_days(28), today()).unwrap();
        let points: Vec<_> = plan.projection().collect();

        assert_eq!(points.len(), 5);
        assert_eq!(points[0].week, 0);
        assert!((points[0].projected_weight - 70.0).abs() < f64::EPSILON);
        assert!((points[2].projected_weight - 69.0).abs() < f64::EPSILON);
        assert!((points[4].projected_weight - 68.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_projection_is_capped_and_restartable() {
        let path = ProjectionPath::new(90.0, -20.0, 0.5);
        assert_eq!(path.len(), 13);
        assert_eq!(path.last_week(), 12);

        let first: Vec<_> = path.clone().collect();
        let second: Vec<_> = path.collect();
        assert_eq!(first, second);
        assert!((first[12].projected_weight - 84.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_projection_without_change_is_single_point() {
        let points: Vec<_> = ProjectionPath::new(70.0, 0.0, 0.0).collect();
        assert_eq!(
            points,
            vec![ProjectionPoint {
                week: 0,
                projected_weight: 70.0
            }]
        );
    }

    #[test]
    fn test_plan_by_pace() {
        let plan = GoalPlanner::plan_by_pace(70.0, 67.0, 0.5, today()).unwrap();
        assert_eq!(plan.goal_type, GoalType::Lose);
        assert_eq!(plan.estimated_days, 42);
        assert_eq!(plan.estimated_date, in_days(42));
        assert!(plan.is_healthy_goal);
    }

    #[test]
    fn test_plan_by_pace_rejects_far_targets_and_fast_paces() {
        let err = GoalPlanner::plan_by_pace(70.0, 45.0, 0.5, today()).unwrap_err();
        assert_eq!(err.field(), "target_weight");

        let err = GoalPlanner::plan_by_pace(70.0, 65.0, 1.5, today()).unwrap_err();
        assert_eq!(err.field(), "weekly_pace");
    }

    #[test]
    fn test_to_new_goal_carries_plan() {
        let plan = GoalPlanner::plan_goal(60.2, 57.0, in_days(60), today()).unwrap();
        let new_goal = plan.to_new_goal();
        assert!((new_goal.start_weight - 60.2).abs() < f64::EPSILON);
        assert_eq!(new_goal.goal_type, GoalType::Lose);
        assert_eq!(new_goal.target_date, in_days(60));
    }
}
