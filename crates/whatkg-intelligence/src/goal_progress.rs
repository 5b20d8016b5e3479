// ABOUTME: Goal progress calculator reporting completion percentage and remaining weight
// ABOUTME: Progress is clamped to [0, 100] so overshoot and reversals never leave the range
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use whatkg_core::constants::progress::{HALFWAY_PERCENT, NEARLY_THERE_PERCENT};
use whatkg_core::models::{Goal, GoalType, WeightObservation};
use whatkg_core::units::round_one_decimal;

/// Coarse band of progress used for encouragement messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressTier {
    /// At least 80% of the way
    NearlyThere,
    /// At least 50% of the way
    Halfway,
    /// Below 50%
    Started,
}

impl ProgressTier {
    /// Tier for a progress percentage
    #[must_use]
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= NEARLY_THERE_PERCENT {
            Self::NearlyThere
        } else if percentage >= HALFWAY_PERCENT {
            Self::Halfway
        } else {
            Self::Started
        }
    }

    /// Short message shown next to the progress bar
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::NearlyThere => "Almost there, keep going!",
            Self::Halfway => "Halfway done, nice work!",
            Self::Started => "Good start, keep it up!",
        }
    }
}

/// Progress of a member toward their active goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalProgress {
    /// Completion percentage in `[0, 100]`, one decimal
    pub progress_percentage: f64,
    /// Weight progress was measured at (kg)
    pub current_weight: f64,
    /// Goal target weight (kg)
    pub target_weight: f64,
    /// `target - current`, signed, one decimal
    pub remaining_weight: f64,
    /// Direction of the goal
    pub goal_type: GoalType,
}

impl GoalProgress {
    /// Encouragement tier for this progress
    #[must_use]
    pub fn tier(&self) -> ProgressTier {
        ProgressTier::from_percentage(self.progress_percentage)
    }

    /// Absolute weight still to go (kg)
    #[must_use]
    pub fn remaining_abs(&self) -> f64 {
        self.remaining_weight.abs()
    }
}

/// Goal progress calculator
pub struct GoalProgressCalculator;

impl GoalProgressCalculator {
    /// Compute progress of `current_weight` along the goal's start-to-target path.
    ///
    /// A goal whose start equals its target reports 0%. Moving away from the
    /// target clamps at 0% and overshooting it clamps at 100%.
    #[must_use]
    pub fn compute_progress(goal: &Goal, current_weight: f64) -> GoalProgress {
        let total_change = goal.target_weight - goal.start_weight;

        let progress = if total_change == 0.0 {
            0.0
        } else {
            ((current_weight - goal.start_weight) / total_change * 100.0).clamp(0.0, 100.0)
        };

        GoalProgress {
            progress_percentage: round_one_decimal(progress),
            current_weight,
            target_weight: goal.target_weight,
            remaining_weight: round_one_decimal(goal.target_weight - current_weight),
            goal_type: goal.goal_type,
        }
    }

    /// Progress for the dashboard, or `None` when there is no active goal or
    /// nothing recorded yet
    #[must_use]
    pub fn progress_for(
        goal: Option<&Goal>,
        latest: Option<&WeightObservation>,
    ) -> Option<GoalProgress> {
        let goal = goal.filter(|g| g.is_active)?;
        let latest = latest?;
        Some(Self::compute_progress(goal, latest.weight))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use whatkg_core::models::{MemberId, NewGoal};

    fn goal(start: f64, target: f64) -> Goal {
        let goal_type = if target < start {
            GoalType::Lose
        } else if target > start {
            GoalType::Gain
        } else {
            GoalType::Maintain
        };
        Goal::from_new(
            MemberId::new("dad"),
            NewGoal {
                start_weight: start,
                target_weight: target,
                target_date: "2024-12-31".parse().unwrap(),
                goal_type,
                weekly_target: 0.5,
            },
            Utc::now(),
        )
    }

    #[test]
    fn test_overshoot_clamps_to_hundred() {
        let progress = GoalProgressCalculator::compute_progress(&goal(80.0, 70.0), 60.0);
        assert!((progress.progress_percentage - 100.0).abs() < f64::EPSILON);
        assert!((progress.remaining_weight - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_reversal_clamps_to_zero() {
        let progress = GoalProgressCalculator::compute_progress(&goal(80.0, 70.0), 83.0);
        assert!(progress.progress_percentage.abs() < f64::EPSILON);
        assert_eq!(progress.tier(), ProgressTier::Started);
    }

    #[test]
    fn test_zero_total_change_is_zero_percent() {
        for current in [50.0, 70.0, 90.0] {
            let progress = GoalProgressCalculator::compute_progress(&goal(70.0, 70.0), current);
            assert!(progress.progress_percentage.abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_partial_progress_rounds() {
        let progress = GoalProgressCalculator::compute_progress(&goal(60.2, 57.0), 58.5);
        assert!((progress.progress_percentage - 53.1).abs() < f64::EPSILON);
        assert!((progress.remaining_weight - -1.5).abs() < f64::EPSILON);
        assert!((progress.remaining_abs() - 1.5).abs() < f64::EPSILON);
        assert_eq!(progress.tier(), ProgressTier::Halfway);
    }

    #[test]
    fn test_progress_for_requires_active_goal() {
        let mut inactive = goal(80.0, 70.0);
        inactive.deactivate(Utc::now());
        assert!(GoalProgressCalculator::progress_for(Some(&inactive), None).is_none());
        assert!(GoalProgressCalculator::progress_for(None, None).is_none());
    }

    #[test]
    fn test_tier_thresholds() {
        assert_eq!(ProgressTier::from_percentage(80.0), ProgressTier::NearlyThere);
        assert_eq!(ProgressTier::from_percentage(79.9), ProgressTier::Halfway);
        assert_eq!(ProgressTier::from_percentage(50.0), ProgressTier::Halfway);
        assert_eq!(ProgressTier::from_percentage(49.9), ProgressTier::Started);
    }
}
