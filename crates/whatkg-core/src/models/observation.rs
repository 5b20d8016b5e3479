// ABOUTME: Weight observation model recorded per member per calendar date
// ABOUTME: Defines the deterministic chronological ordering used for same-day duplicates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::member::MemberId;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use uuid::Uuid;

/// Identifier of a weight observation
pub type ObservationId = Uuid;

/// A single recorded weight measurement for a member on a date.
///
/// The model does not enforce one observation per day. When several share a
/// date, [`chronological_cmp`] orders them by `created_at` and then by the
/// store's insertion `sequence`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightObservation {
    /// Observation identifier
    pub id: ObservationId,
    /// Member the observation belongs to
    pub member_id: MemberId,
    /// Calendar date the observation is for
    pub date: NaiveDate,
    /// Body weight in kilograms
    pub weight: f64,
    /// Optional free-text note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
    /// Insertion sequence assigned by the store
    #[serde(default)]
    pub sequence: u64,
}

/// Input for recording an observation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewObservation {
    /// Member to record for
    pub member_id: MemberId,
    /// Calendar date
    pub date: NaiveDate,
    /// Weight in kilograms
    pub weight: f64,
    /// Optional note; empty strings are stored as `None`
    #[serde(default)]
    pub memo: Option<String>,
}

/// Explicit edit of an observation; `None` leaves a field unchanged
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObservationUpdate {
    /// New date
    pub date: Option<NaiveDate>,
    /// New weight in kilograms
    pub weight: Option<f64>,
    /// New memo; `Some("")` clears it
    pub memo: Option<String>,
}

impl WeightObservation {
    /// Build an observation from creation input
    #[must_use]
    pub fn from_new(new: NewObservation, now: DateTime<Utc>, sequence: u64) -> Self {
        Self {
            id: Uuid::new_v4(),
            member_id: new.member_id,
            date: new.date,
            weight: new.weight,
            memo: normalize_memo(new.memo),
            created_at: now,
            updated_at: now,
            sequence,
        }
    }

    /// Apply an explicit edit
    pub fn apply(&mut self, update: ObservationUpdate, now: DateTime<Utc>) {
        if let Some(date) = update.date {
            self.date = date;
        }
        if let Some(weight) = update.weight {
            self.weight = weight;
        }
        if update.memo.is_some() {
            self.memo = normalize_memo(update.memo);
        }
        self.updated_at = now;
    }

    /// Memo text, or an empty string when there is none
    #[must_use]
    pub fn memo_text(&self) -> &str {
        self.memo.as_deref().unwrap_or_default()
    }
}

fn normalize_memo(memo: Option<String>) -> Option<String> {
    memo.map(|m| m.trim().to_owned()).filter(|m| !m.is_empty())
}

/// Oldest-to-newest ordering: by date, then creation time, then insertion sequence
#[must_use]
pub fn chronological_cmp(a: &WeightObservation, b: &WeightObservation) -> Ordering {
    a.date
        .cmp(&b.date)
        .then_with(|| a.created_at.cmp(&b.created_at))
        .then_with(|| a.sequence.cmp(&b.sequence))
}

/// Newest observation of a collection, using [`chronological_cmp`]
pub fn latest_of<'a, I>(observations: I) -> Option<&'a WeightObservation>
where
    I: IntoIterator<Item = &'a WeightObservation>,
{
    observations
        .into_iter()
        .max_by(|a, b| chronological_cmp(a, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn observation(date: &str, weight: f64, created_at: DateTime<Utc>, sequence: u64) -> WeightObservation {
        WeightObservation::from_new(
            NewObservation {
                member_id: MemberId::new("mom"),
                date: date.parse().unwrap(),
                weight,
                memo: None,
            },
            created_at,
            sequence,
        )
    }

    #[test]
    fn test_same_day_tie_break_prefers_later_creation() {
        let now = Utc::now();
        let morning = observation("2024-07-10", 60.0, now, 1);
        let evening = observation("2024-07-10", 60.4, now + Duration::hours(9), 2);

        let latest = latest_of([&evening, &morning]).unwrap();
        assert!((latest.weight - 60.4).abs() < f64::EPSILON);
    }

    #[test]
    fn test_same_instant_tie_break_prefers_later_insertion() {
        let now = Utc::now();
        let first = observation("2024-07-10", 60.0, now, 7);
        let second = observation("2024-07-10", 59.8, now, 8);

        assert_eq!(chronological_cmp(&first, &second), Ordering::Less);
        assert!((latest_of([&second, &first]).unwrap().weight - 59.8).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_memo_is_stored_as_none() {
        let mut obs = observation("2024-07-10", 60.0, Utc::now(), 1);
        obs.apply(
            ObservationUpdate {
                memo: Some("   ".into()),
                ..ObservationUpdate::default()
            },
            Utc::now(),
        );
        assert_eq!(obs.memo, None);
        assert_eq!(obs.memo_text(), "");
    }
}
