// ABOUTME: In-memory store implementing the record, goal, and member store traits
// ABOUTME: DashMap shards with an atomic insertion sequence for deterministic tie-breaks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{GoalStore, MemberStore, RecordStore, StoreError, StoreResult};
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::debug;
use whatkg_core::models::{
    chronological_cmp, FamilyMember, Goal, MemberId, MemberUpdate, NewGoal, NewMember,
    NewObservation, ObservationId, ObservationUpdate, WeightObservation,
};
use whatkg_core::validation::{
    validate_goal, validate_goal_weight, validate_member, validate_member_name, validate_memo,
    validate_new_member, validate_new_observation, validate_observation_weight,
};

#[derive(Debug, Clone)]
struct MemberEntry {
    sequence: u64,
    member: FamilyMember,
}

#[derive(Debug, Default)]
struct StoreState {
    members: DashMap<MemberId, MemberEntry>,
    observations: DashMap<ObservationId, WeightObservation>,
    // Newest goal last
    goals: DashMap<MemberId, Vec<Goal>>,
    sequence: AtomicU64,
}

/// In-memory store shared across tasks.
///
/// Cloning is cheap and every clone sees the same data. Goal supersede runs
/// while holding the member's map entry, so deactivating the prior goal and
/// inserting the new one is atomic per member.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    state: Arc<StoreState>,
}

impl InMemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn next_sequence(&self) -> u64 {
        self.state.sequence.fetch_add(1, Ordering::Relaxed)
    }

    fn ensure_active_member(&self, id: &MemberId) -> StoreResult<()> {
        match self.state.members.get(id) {
            Some(entry) if entry.member.is_active => Ok(()),
            _ => Err(StoreError::member_not_found(id)),
        }
    }

    fn ensure_member(&self, id: &MemberId) -> StoreResult<()> {
        if self.state.members.contains_key(id) {
            Ok(())
        } else {
            Err(StoreError::member_not_found(id))
        }
    }

    fn push_goal(&self, goal: Goal) {
        let mut history = self.state.goals.entry(goal.member_id.clone()).or_default();
        if goal.is_active {
            for previous in history.iter_mut().filter(|g| g.is_active) {
                previous.deactivate(goal.created_at);
            }
        }
        history.push(goal);
    }

    fn sorted_members(&self, include_inactive: bool) -> Vec<FamilyMember> {
        let mut entries: Vec<MemberEntry> = self
            .state
            .members
            .iter()
            .filter(|entry| include_inactive || entry.member.is_active)
            .map(|entry| entry.value().clone())
            .collect();
        entries.sort_by(|a, b| {
            a.member
                .created_at
                .cmp(&b.member.created_at)
                .then_with(|| a.sequence.cmp(&b.sequence))
        });
        entries.into_iter().map(|entry| entry.member).collect()
    }

    fn member_observations(&self, member: &MemberId) -> Vec<WeightObservation> {
        self.state
            .observations
            .iter()
            .filter(|entry| entry.value().member_id == *member)
            .map(|entry| entry.value().clone())
            .collect()
    }
}

#[async_trait]
impl RecordStore for InMemoryStore {
    async fn add_observation(&self, new: NewObservation) -> StoreResult<WeightObservation> {
        validate_new_observation(&new)?;
        self.ensure_active_member(&new.member_id)?;

        let observation = WeightObservation::from_new(new, Utc::now(), self.next_sequence());
        self.state
            .observations
            .insert(observation.id, observation.clone());

        debug!(
            member.id = %observation.member_id,
            record.id = %observation.id,
            record.date = %observation.date,
            "Stored observation"
        );
        Ok(observation)
    }

    async fn update_observation(
        &self,
        id: ObservationId,
        update: ObservationUpdate,
    ) -> StoreResult<WeightObservation> {
        if let Some(weight) = update.weight {
            validate_observation_weight(weight)?;
        }
        validate_memo(update.memo.as_deref())?;

        let mut entry = self
            .state
            .observations
            .get_mut(&id)
            .ok_or_else(|| StoreError::observation_not_found(id))?;
        entry.apply(update, Utc::now());
        Ok(entry.value().clone())
    }

    async fn delete_observation(&self, id: ObservationId) -> StoreResult<WeightObservation> {
        self.state
            .observations
            .remove(&id)
            .map(|(_, observation)| observation)
            .ok_or_else(|| StoreError::observation_not_found(id))
    }

    async fn recent_descending(
        &self,
        member: &MemberId,
        limit: usize,
    ) -> StoreResult<Vec<WeightObservation>> {
        let mut observations = self.member_observations(member);
        observations.sort_by(|a, b| chronological_cmp(b, a));
        observations.truncate(limit);
        Ok(observations)
    }

    async fn range_ascending(
        &self,
        member: &MemberId,
        from: NaiveDate,
        to: NaiveDate,
    ) -> StoreResult<Vec<WeightObservation>> {
        let mut observations: Vec<WeightObservation> = self
            .member_observations(member)
            .into_iter()
            .filter(|o| o.date >= from && o.date <= to)
            .collect();
        observations.sort_by(chronological_cmp);
        Ok(observations)
    }

    async fn latest_observation(&self, member: &MemberId) -> StoreResult<Option<WeightObservation>> {
        Ok(self
            .member_observations(member)
            .into_iter()
            .max_by(chronological_cmp))
    }

    async fn count_observations(&self, member: &MemberId) -> StoreResult<usize> {
        Ok(self
            .state
            .observations
            .iter()
            .filter(|entry| entry.value().member_id == *member)
            .count())
    }

    async fn delete_member_observations(&self, member: &MemberId) -> StoreResult<usize> {
        let before = self.state.observations.len();
        self.state
            .observations
            .retain(|_, observation| observation.member_id != *member);
        Ok(before.saturating_sub(self.state.observations.len()))
    }

    async fn restore_observation(
        &self,
        mut observation: WeightObservation,
    ) -> StoreResult<WeightObservation> {
        validate_observation_weight(observation.weight)?;
        validate_memo(observation.memo.as_deref())?;
        self.ensure_member(&observation.member_id)?;

        match self.state.observations.entry(observation.id) {
            Entry::Occupied(_) => Err(StoreError::Conflict {
                entity: "observation",
                id: observation.id.to_string(),
            }),
            Entry::Vacant(slot) => {
                observation.sequence = self.next_sequence();
                slot.insert(observation.clone());
                debug!(
                    member.id = %observation.member_id,
                    record.id = %observation.id,
                    "Restored observation"
                );
                Ok(observation)
            }
        }
    }
}

#[async_trait]
impl GoalStore for InMemoryStore {
    async fn set_goal(&self, member: &MemberId, new: NewGoal) -> StoreResult<Goal> {
        validate_goal_weight("start_weight", new.start_weight)?;
        validate_goal_weight("target_weight", new.target_weight)?;
        self.ensure_active_member(member)?;

        let goal = Goal::from_new(member.clone(), new, Utc::now());
        self.push_goal(goal.clone());

        debug!(member.id = %member, goal.id = %goal.id, goal.goal_type = %goal.goal_type, "Set goal");
        Ok(goal)
    }

    async fn active_goal(&self, member: &MemberId) -> StoreResult<Option<Goal>> {
        Ok(self
            .state
            .goals
            .get(member)
            .and_then(|history| history.iter().rev().find(|g| g.is_active).cloned()))
    }

    async fn goal_history(&self, member: &MemberId) -> StoreResult<Vec<Goal>> {
        Ok(self
            .state
            .goals
            .get(member)
            .map(|history| history.iter().rev().cloned().collect())
            .unwrap_or_default())
    }

    async fn clear_goal(&self, member: &MemberId) -> StoreResult<Option<Goal>> {
        let Some(mut history) = self.state.goals.get_mut(member) else {
            return Ok(None);
        };
        let now = Utc::now();
        let cleared = history.iter_mut().rev().find(|g| g.is_active).map(|goal| {
            goal.deactivate(now);
            goal.clone()
        });
        Ok(cleared)
    }

    async fn restore_goal(&self, goal: Goal) -> StoreResult<Goal> {
        validate_goal(&goal)?;
        self.ensure_member(&goal.member_id)?;

        let taken = self
            .state
            .goals
            .get(&goal.member_id)
            .is_some_and(|history| history.iter().any(|g| g.id == goal.id));
        if taken {
            return Err(StoreError::Conflict {
                entity: "goal",
                id: goal.id.to_string(),
            });
        }

        self.push_goal(goal.clone());
        debug!(member.id = %goal.member_id, goal.id = %goal.id, goal.active = goal.is_active, "Restored goal");
        Ok(goal)
    }
}

#[async_trait]
impl MemberStore for InMemoryStore {
    async fn add_member(&self, new: NewMember) -> StoreResult<FamilyMember> {
        validate_new_member(&new)?;
        let member = FamilyMember::from_new(new, Utc::now());

        match self.state.members.entry(member.id.clone()) {
            Entry::Occupied(_) => Err(StoreError::Conflict {
                entity: "member",
                id: member.id.to_string(),
            }),
            Entry::Vacant(slot) => {
                slot.insert(MemberEntry {
                    sequence: self.next_sequence(),
                    member: member.clone(),
                });
                debug!(member.id = %member.id, "Added member");
                Ok(member)
            }
        }
    }

    async fn get_member(&self, id: &MemberId) -> StoreResult<Option<FamilyMember>> {
        Ok(self.state.members.get(id).map(|entry| entry.member.clone()))
    }

    async fn list_members(&self) -> StoreResult<Vec<FamilyMember>> {
        Ok(self.sorted_members(false))
    }

    async fn all_members(&self) -> StoreResult<Vec<FamilyMember>> {
        Ok(self.sorted_members(true))
    }

    async fn update_member(&self, id: &MemberId, update: MemberUpdate) -> StoreResult<FamilyMember> {
        if let Some(name) = update.name.as_deref() {
            validate_member_name(name)?;
        }
        if let Some(target) = update.target_weight {
            validate_goal_weight("target_weight", target)?;
        }

        let mut entry = self
            .state
            .members
            .get_mut(id)
            .ok_or_else(|| StoreError::member_not_found(id))?;
        entry.member.apply(update, Utc::now());
        Ok(entry.member.clone())
    }

    async fn deactivate_member(&self, id: &MemberId) -> StoreResult<()> {
        let mut entry = self
            .state
            .members
            .get_mut(id)
            .ok_or_else(|| StoreError::member_not_found(id))?;
        entry.member.is_active = false;
        entry.member.updated_at = Utc::now();
        Ok(())
    }

    async fn restore_member(&self, member: FamilyMember) -> StoreResult<FamilyMember> {
        validate_member(&member)?;

        match self.state.members.entry(member.id.clone()) {
            Entry::Occupied(_) => Err(StoreError::Conflict {
                entity: "member",
                id: member.id.to_string(),
            }),
            Entry::Vacant(slot) => {
                slot.insert(MemberEntry {
                    sequence: self.next_sequence(),
                    member: member.clone(),
                });
                debug!(member.id = %member.id, member.active = member.is_active, "Restored member");
                Ok(member)
            }
        }
    }
}
