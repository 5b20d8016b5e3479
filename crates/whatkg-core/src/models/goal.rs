// ABOUTME: Weight goal model with start/target weights, target date, and derived pacing
// ABOUTME: At most one goal per member is active; superseded goals stay in history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::member::MemberId;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Direction a goal moves the member's weight in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalType {
    /// Reduce weight
    Lose,
    /// Increase weight
    Gain,
    /// Hold weight within the dead-zone
    Maintain,
}

impl fmt::Display for GoalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lose => write!(f, "lose"),
            Self::Gain => write!(f, "gain"),
            Self::Maintain => write!(f, "maintain"),
        }
    }
}

/// A target weight and date a member is working toward
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    /// Goal identifier
    pub id: Uuid,
    /// Member the goal belongs to
    pub member_id: MemberId,
    /// Weight when the goal was created (kg)
    pub start_weight: f64,
    /// Target weight (kg)
    pub target_weight: f64,
    /// Date the target should be reached by
    pub target_date: NaiveDate,
    /// Direction of the goal
    pub goal_type: GoalType,
    /// Required weekly change (kg/week, never negative)
    pub weekly_target: f64,
    /// Whether this is the member's goal in effect
    pub is_active: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Input for setting a goal, usually produced by the goal planner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewGoal {
    /// Weight when the goal is created (kg)
    pub start_weight: f64,
    /// Target weight (kg)
    pub target_weight: f64,
    /// Date the target should be reached by
    pub target_date: NaiveDate,
    /// Direction of the goal
    pub goal_type: GoalType,
    /// Required weekly change (kg/week)
    pub weekly_target: f64,
}

impl Goal {
    /// Build an active goal for a member from creation input
    #[must_use]
    pub fn from_new(member_id: MemberId, new: NewGoal, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            member_id,
            start_weight: new.start_weight,
            target_weight: new.target_weight,
            target_date: new.target_date,
            goal_type: new.goal_type,
            weekly_target: new.weekly_target.abs(),
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Flag this goal as no longer in effect
    pub fn deactivate(&mut self, now: DateTime<Utc>) {
        self.is_active = false;
        self.updated_at = now;
    }
}
