// ABOUTME: Integration tests for goal progress calculation
// ABOUTME: Covers clamping, zero-length goals, rounding, and encouragement tiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{day, fixed_now, observation};
use whatkg::intelligence::{GoalProgressCalculator, ProgressTier};
use whatkg::models::{Goal, GoalType, MemberId, NewGoal};

fn goal(start: f64, target: f64, goal_type: GoalType) -> Goal {
    Goal::from_new(
        MemberId::new("test"),
        NewGoal {
            start_weight: start,
            target_weight: target,
            target_date: day("2025-12-31"),
            goal_type,
            weekly_target: 0.5,
        },
        fixed_now(),
    )
}

#[test]
fn test_overshooting_target_clamps_to_hundred() {
    let progress = GoalProgressCalculator::compute_progress(&goal(80.0, 70.0, GoalType::Lose), 60.0);
    assert!((progress.progress_percentage - 100.0).abs() < f64::EPSILON);
    assert!((progress.remaining_weight - 10.0).abs() < 1e-9);
}

#[test]
fn test_moving_away_clamps_to_zero() {
    let progress = GoalProgressCalculator::compute_progress(&goal(80.0, 70.0, GoalType::Lose), 85.0);
    assert!(progress.progress_percentage.abs() < f64::EPSILON);
}

#[test]
fn test_equal_start_and_target_is_zero_for_any_weight() {
    let maintain = goal(70.0, 70.0, GoalType::Maintain);
    for current in [60.0, 70.0, 80.0] {
        let progress = GoalProgressCalculator::compute_progress(&maintain, current);
        assert!(progress.progress_percentage.abs() < f64::EPSILON);
    }
}

#[test]
fn test_partial_progress_rounds_to_one_decimal() {
    let progress = GoalProgressCalculator::compute_progress(&goal(60.2, 57.0, GoalType::Lose), 58.5);
    assert!((progress.progress_percentage - 53.1).abs() < 1e-9);
    assert!((progress.remaining_weight - -1.5).abs() < 1e-9);
    assert!((progress.remaining_abs() - 1.5).abs() < 1e-9);
    assert_eq!(progress.tier(), ProgressTier::Halfway);
}

#[test]
fn test_gain_goal_progress() {
    let progress = GoalProgressCalculator::compute_progress(&goal(50.0, 55.0, GoalType::Gain), 54.0);
    assert!((progress.progress_percentage - 80.0).abs() < 1e-9);
    assert_eq!(progress.tier(), ProgressTier::NearlyThere);
}

#[test]
fn test_progress_requires_active_goal_and_a_record() {
    let mut active = goal(80.0, 70.0, GoalType::Lose);
    let latest = observation("2025-07-01", 75.0, 1);

    assert!(GoalProgressCalculator::progress_for(Some(&active), None).is_none());
    assert!(GoalProgressCalculator::progress_for(None, Some(&latest)).is_none());

    let progress = GoalProgressCalculator::progress_for(Some(&active), Some(&latest)).unwrap();
    assert!((progress.progress_percentage - 50.0).abs() < 1e-9);

    active.deactivate(fixed_now());
    assert!(GoalProgressCalculator::progress_for(Some(&active), Some(&latest)).is_none());
}

#[test]
fn test_tier_boundaries() {
    assert_eq!(ProgressTier::from_percentage(80.0), ProgressTier::NearlyThere);
    assert_eq!(ProgressTier::from_percentage(79.9), ProgressTier::Halfway);
    assert_eq!(ProgressTier::from_percentage(50.0), ProgressTier::Halfway);
    assert_eq!(ProgressTier::from_percentage(49.9), ProgressTier::Started);
}
