// ABOUTME: Input validation for weights, memos, member names, and dates
// ABOUTME: Returns field-tagged ValidationError values instead of panicking or coercing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Input validation shared by services and the CLI.
//!
//! Observation weights use an exclusive upper bound while goal weights accept
//! the bound itself; both reject zero, negatives, and non-finite values.

use crate::constants::{limits, planner};
use crate::errors::ValidationError;
use crate::models::{FamilyMember, Goal, NewMember, NewObservation};
use chrono::NaiveDate;

/// Parse a user-entered number for the named field
///
/// # Errors
///
/// Returns `Required` for blank input and `NotNumeric` when parsing fails
pub fn parse_number(input: &str, field: &'static str) -> Result<f64, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required { field });
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or(ValidationError::NotNumeric { field })
}

/// Parse a `YYYY-MM-DD` date for the named field
///
/// # Errors
///
/// Returns `Required` for blank input and `InvalidDate` when parsing fails
pub fn parse_date(input: &str, field: &'static str) -> Result<NaiveDate, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required { field });
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| ValidationError::InvalidDate { field })
}

/// Validate an observation weight: `0 < weight < 1000`
///
/// # Errors
///
/// Returns `OutOfRange` when the weight is not finite or outside the range
pub fn validate_observation_weight(weight: f64) -> Result<f64, ValidationError> {
    if weight.is_finite() && weight > 0.0 && weight < limits::MAX_OBSERVATION_WEIGHT_KG {
        Ok(weight)
    } else {
        Err(ValidationError::OutOfRange {
            field: "weight",
            min: 0.0,
            max: limits::MAX_OBSERVATION_WEIGHT_KG,
            value: weight,
        })
    }
}

/// Validate a goal weight: `0 < weight <= 1000`
///
/// # Errors
///
/// Returns `OutOfRange` when the weight is not finite or outside the range
pub fn validate_goal_weight(field: &'static str, weight: f64) -> Result<f64, ValidationError> {
    if weight.is_finite() && weight > 0.0 && weight <= limits::MAX_GOAL_WEIGHT_KG {
        Ok(weight)
    } else {
        Err(ValidationError::OutOfRange {
            field,
            min: 0.0,
            max: limits::MAX_GOAL_WEIGHT_KG,
            value: weight,
        })
    }
}

/// Validate an optional memo length (in characters, not bytes)
///
/// # Errors
///
/// Returns `TooLong` when the memo exceeds the limit
pub fn validate_memo(memo: Option<&str>) -> Result<(), ValidationError> {
    match memo {
        Some(text) if text.trim().chars().count() > limits::MAX_MEMO_CHARS => {
            Err(ValidationError::TooLong {
                field: "memo",
                max: limits::MAX_MEMO_CHARS,
            })
        }
        _ => Ok(()),
    }
}

/// Validate that a date lies strictly after `today`
///
/// # Errors
///
/// Returns `DateNotInFuture` when `date <= today`
pub fn validate_future_date(
    field: &'static str,
    date: NaiveDate,
    today: NaiveDate,
) -> Result<NaiveDate, ValidationError> {
    if date > today {
        Ok(date)
    } else {
        Err(ValidationError::DateNotInFuture { field })
    }
}

/// Validate a weekly pace chosen for pace-based planning
///
/// # Errors
///
/// Returns `OutOfRange` when the pace is outside `[0.1, 1.0]` kg/week
pub fn validate_weekly_pace(pace: f64) -> Result<f64, ValidationError> {
    if pace.is_finite()
        && (planner::MIN_WEEKLY_PACE_KG..=planner::MAX_WEEKLY_PACE_KG).contains(&pace)
    {
        Ok(pace)
    } else {
        Err(ValidationError::OutOfRange {
            field: "weekly_pace",
            min: planner::MIN_WEEKLY_PACE_KG,
            max: planner::MAX_WEEKLY_PACE_KG,
            value: pace,
        })
    }
}

/// Validate an observation before it is stored
///
/// # Errors
///
/// Returns the first failing field
pub fn validate_new_observation(observation: &NewObservation) -> Result<(), ValidationError> {
    validate_observation_weight(observation.weight)?;
    validate_memo(observation.memo.as_deref())
}

/// Validate a member display name
///
/// # Errors
///
/// Returns `Required` for blank names and `TooLong` beyond the limit
pub fn validate_member_name(name: &str) -> Result<(), ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required { field: "name" });
    }
    if trimmed.chars().count() > limits::MAX_MEMBER_NAME_CHARS {
        return Err(ValidationError::TooLong {
            field: "name",
            max: limits::MAX_MEMBER_NAME_CHARS,
        });
    }
    Ok(())
}

/// Validate a member before it is stored
///
/// # Errors
///
/// Returns the first failing field
pub fn validate_new_member(member: &NewMember) -> Result<(), ValidationError> {
    validate_member_name(&member.name)?;
    if let Some(target) = member.target_weight {
        validate_goal_weight("target_weight", target)?;
    }
    Ok(())
}

/// Validate a stored member profile
///
/// # Errors
///
/// Returns the first failing field
pub fn validate_member(member: &FamilyMember) -> Result<(), ValidationError> {
    validate_member_name(&member.name)?;
    if let Some(target) = member.target_weight {
        validate_goal_weight("target_weight", target)?;
    }
    Ok(())
}

/// Validate the weights of a stored goal
///
/// # Errors
///
/// Returns `OutOfRange` naming the failing weight
pub fn validate_goal(goal: &Goal) -> Result<(), ValidationError> {
    validate_goal_weight("start_weight", goal.start_weight)?;
    validate_goal_weight("target_weight", goal.target_weight)?;
    Ok(())
}
