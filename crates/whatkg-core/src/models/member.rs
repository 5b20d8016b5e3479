// ABOUTME: Family member model with relation, optional profile fields, and soft deactivation
// ABOUTME: MemberId is an opaque string identifier shared by records and goals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque identifier of a family member.
///
/// Members are not authentication principals; the identifier only groups
/// observations and goals.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(String);

impl MemberId {
    /// Wrap an existing identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh random identifier
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Borrow the identifier as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MemberId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

/// How a member relates to the account holder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    /// The account holder themself
    #[serde(rename = "self")]
    #[default]
    Myself,
    /// Spouse or partner
    Spouse,
    /// Child
    Child,
    /// Parent
    Parent,
    /// Any other relation
    Other,
}

impl Relation {
    /// Parse a relation name, falling back to `Other`
    #[must_use]
    pub fn from_str_or_other(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "self" | "me" => Self::Myself,
            "spouse" | "partner" => Self::Spouse,
            "child" | "son" | "daughter" => Self::Child,
            "parent" | "mom" | "dad" => Self::Parent,
            _ => Self::Other,
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Myself => write!(f, "self"),
            Self::Spouse => write!(f, "spouse"),
            Self::Child => write!(f, "child"),
            Self::Parent => write!(f, "parent"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// Gender recorded on a member profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Female
    Female,
    /// Male
    Male,
    /// Other or not specified
    Other,
}

/// A family member whose weight is tracked
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FamilyMember {
    /// Member identifier
    pub id: MemberId,
    /// Display name
    pub name: String,
    /// Relation to the account holder
    pub relation: Relation,
    /// Date of birth
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
    /// Gender
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    /// Target weight shown on the member card (kg)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_weight: Option<f64>,
    /// Inactive members are hidden but keep their records
    pub is_active: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a member
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewMember {
    /// Explicit identifier; generated when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<MemberId>,
    /// Display name
    pub name: String,
    /// Relation to the account holder
    #[serde(default)]
    pub relation: Relation,
    /// Date of birth
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    /// Gender
    #[serde(default)]
    pub gender: Option<Gender>,
    /// Target weight (kg)
    #[serde(default)]
    pub target_weight: Option<f64>,
}

/// Partial update of a member; `None` leaves a field unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemberUpdate {
    /// New display name
    pub name: Option<String>,
    /// New relation
    pub relation: Option<Relation>,
    /// New date of birth
    pub birth_date: Option<NaiveDate>,
    /// New gender
    pub gender: Option<Gender>,
    /// New target weight (kg)
    pub target_weight: Option<f64>,
}

impl FamilyMember {
    /// Build a member from creation input at the given instant
    #[must_use]
    pub fn from_new(new: NewMember, now: DateTime<Utc>) -> Self {
        Self {
            id: new.id.unwrap_or_else(MemberId::generate),
            name: new.name.trim().to_owned(),
            relation: new.relation,
            birth_date: new.birth_date,
            gender: new.gender,
            target_weight: new.target_weight,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial update at the given instant
    pub fn apply(&mut self, update: MemberUpdate, now: DateTime<Utc>) {
        if let Some(name) = update.name {
            self.name = name.trim().to_owned();
        }
        if let Some(relation) = update.relation {
            self.relation = relation;
        }
        if update.birth_date.is_some() {
            self.birth_date = update.birth_date;
        }
        if update.gender.is_some() {
            self.gender = update.gender;
        }
        if update.target_weight.is_some() {
            self.target_weight = update.target_weight;
        }
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relation_serializes_self() {
        let json = serde_json::to_string(&Relation::Myself).unwrap();
        assert_eq!(json, "\"self\"");
        let parsed: Relation = serde_json::from_str("\"child\"").unwrap();
        assert_eq!(parsed, Relation::Child);
    }

    #[test]
    fn test_member_from_new_trims_name_and_generates_id() {
        let now = Utc::now();
        let member = FamilyMember::from_new(
            NewMember {
                name: "  Mom ".into(),
                relation: Relation::Parent,
                ..NewMember::default()
            },
            now,
        );

        assert_eq!(member.name, "Mom");
        assert!(member.is_active);
        assert!(!member.id.as_str().is_empty());
    }

    #[test]
    fn test_member_update_keeps_unset_fields() {
        let now = Utc::now();
        let mut member = FamilyMember::from_new(
            NewMember {
                id: Some(MemberId::new("dad")),
                name: "Dad".into(),
                target_weight: Some(75.0),
                ..NewMember::default()
            },
            now,
        );

        member.apply(
            MemberUpdate {
                name: Some("Father".into()),
                ..MemberUpdate::default()
            },
            now,
        );

        assert_eq!(member.name, "Father");
        assert_eq!(member.target_weight, Some(75.0));
    }
}
