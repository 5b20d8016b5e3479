// ABOUTME: Storage abstraction for members, weight observations, and goals
// ABOUTME: Async traits with explicit ordering in method names plus the StoreError type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Storage abstraction layer.
//!
//! Persistence is a collaborator of the statistics engine: services read
//! observations through these traits and hand them to the pure components.
//! Ordering is part of each query method's name (`recent_descending`,
//! `range_ascending`) so callers never depend on an implicit order.

use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;
use whatkg_core::errors::{AppError, ErrorCode, ValidationError};
use whatkg_core::models::{
    FamilyMember, Goal, MemberId, MemberUpdate, NewGoal, NewMember, NewObservation,
    ObservationId, ObservationUpdate, WeightObservation,
};

/// In-memory store backed by concurrent maps
pub mod memory;

pub use memory::InMemoryStore;

/// Errors raised by store implementations
#[derive(Debug, Error)]
pub enum StoreError {
    /// Referenced entity does not exist
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Kind of entity
        entity: &'static str,
        /// Identifier that was looked up
        id: String,
    },
    /// Entity with the same identifier already exists
    #[error("{entity} already exists: {id}")]
    Conflict {
        /// Kind of entity
        entity: &'static str,
        /// Conflicting identifier
        id: String,
    },
    /// Stored data would violate a validation rule
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

impl StoreError {
    /// Not-found error for a member
    pub fn member_not_found(id: &MemberId) -> Self {
        Self::NotFound {
            entity: "member",
            id: id.to_string(),
        }
    }

    /// Not-found error for an observation
    #[must_use]
    pub fn observation_not_found(id: ObservationId) -> Self {
        Self::NotFound {
            entity: "observation",
            id: id.to_string(),
        }
    }

    /// Whether the error is an identifier conflict
    #[must_use]
    pub const fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }
}

impl From<StoreError> for AppError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::NotFound { entity, id } => {
                Self::not_found(format!("{entity} {id}")).with_resource_id(id)
            }
            StoreError::Conflict { entity, id } => {
                Self::new(ErrorCode::ResourceAlreadyExists, format!("{entity} {id} already exists"))
                    .with_resource_id(id)
            }
            StoreError::Invalid(validation) => validation.into(),
        }
    }
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Weight observation storage
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Store a new observation for an active member
    async fn add_observation(&self, new: NewObservation) -> StoreResult<WeightObservation>;

    /// Change an observation's date, weight, or memo
    async fn update_observation(
        &self,
        id: ObservationId,
        update: ObservationUpdate,
    ) -> StoreResult<WeightObservation>;

    /// Remove an observation, returning it
    async fn delete_observation(&self, id: ObservationId) -> StoreResult<WeightObservation>;

    /// Up to `limit` observations, newest first
    async fn recent_descending(
        &self,
        member: &MemberId,
        limit: usize,
    ) -> StoreResult<Vec<WeightObservation>>;

    /// Observations with `from <= date <= to`, oldest first
    async fn range_ascending(
        &self,
        member: &MemberId,
        from: NaiveDate,
        to: NaiveDate,
    ) -> StoreResult<Vec<WeightObservation>>;

    /// Newest observation by the date, creation time, insertion order tie-break
    async fn latest_observation(&self, member: &MemberId) -> StoreResult<Option<WeightObservation>>;

    /// Number of observations for a member
    async fn count_observations(&self, member: &MemberId) -> StoreResult<usize>;

    /// Remove every observation of a member, returning how many were removed
    async fn delete_member_observations(&self, member: &MemberId) -> StoreResult<usize>;

    /// Re-insert a previously stored observation, keeping its id and timestamps.
    ///
    /// The member may be inactive. A fresh insertion sequence is assigned, so
    /// restoring in chronological order keeps same-day ties in order.
    async fn restore_observation(&self, observation: WeightObservation) -> StoreResult<WeightObservation>;
}

/// Goal storage with supersede semantics
#[async_trait]
pub trait GoalStore: Send + Sync {
    /// Store a new active goal, deactivating any goal currently active for the member
    async fn set_goal(&self, member: &MemberId, new: NewGoal) -> StoreResult<Goal>;

    /// The member's active goal
    async fn active_goal(&self, member: &MemberId) -> StoreResult<Option<Goal>>;

    /// Every goal the member ever set, newest first
    async fn goal_history(&self, member: &MemberId) -> StoreResult<Vec<Goal>>;

    /// Deactivate the active goal, returning it
    async fn clear_goal(&self, member: &MemberId) -> StoreResult<Option<Goal>>;

    /// Re-insert a previously stored goal as the member's newest, keeping its
    /// id, flags, and timestamps. An active goal supersedes the current one.
    async fn restore_goal(&self, goal: Goal) -> StoreResult<Goal>;
}

/// Family member storage
#[async_trait]
pub trait MemberStore: Send + Sync {
    /// Store a new member
    async fn add_member(&self, new: NewMember) -> StoreResult<FamilyMember>;

    /// Member by identifier, active or not
    async fn get_member(&self, id: &MemberId) -> StoreResult<Option<FamilyMember>>;

    /// Active members in creation order
    async fn list_members(&self) -> StoreResult<Vec<FamilyMember>>;

    /// Every member including removed ones, in creation order
    async fn all_members(&self) -> StoreResult<Vec<FamilyMember>>;

    /// Change a member's profile
    async fn update_member(&self, id: &MemberId, update: MemberUpdate) -> StoreResult<FamilyMember>;

    /// Soft-delete a member; records are kept
    async fn deactivate_member(&self, id: &MemberId) -> StoreResult<()>;

    /// Re-insert a previously stored member, keeping its id, active flag, and timestamps
    async fn restore_member(&self, member: FamilyMember) -> StoreResult<FamilyMember>;
}

/// A store providing every collaborator the services need
pub trait DataStore: RecordStore + GoalStore + MemberStore {}

impl<T: RecordStore + GoalStore + MemberStore> DataStore for T {}
