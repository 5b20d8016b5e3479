// ABOUTME: Record service for entering, editing, deleting, and listing weight observations
// ABOUTME: The list view pairs each record with its change versus the previous entry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::members::require_active_member;
use crate::errors::AppResult;
use crate::logging::AppLogger;
use crate::store::{MemberStore, RecordStore, StoreError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{info, warn};
use whatkg_core::models::{MemberId, NewObservation, ObservationId, ObservationUpdate, WeightObservation};
use whatkg_core::validation::validate_new_observation;
use whatkg_intelligence::{EntryChange, RecordQuery, WeightStatistics};

/// A record list row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordListEntry {
    /// The observation
    pub observation: WeightObservation,
    /// Change versus the chronologically previous record, if any
    pub change: Option<EntryChange>,
}

/// Record a weight for a member; `date` defaults to `today`
///
/// # Errors
///
/// Returns a validation error for out-of-range weights or long memos, and
/// `ResourceNotFound` for unknown or removed members
pub async fn record_weight<S>(
    store: &S,
    member: &MemberId,
    weight: f64,
    date: Option<NaiveDate>,
    memo: Option<String>,
    today: NaiveDate,
) -> AppResult<WeightObservation>
where
    S: RecordStore + MemberStore + ?Sized,
{
    require_active_member(store, member).await?;
    let new = NewObservation {
        member_id: member.clone(),
        date: date.unwrap_or(today),
        weight,
        memo,
    };
    validate_new_observation(&new)?;

    let observation = store.add_observation(new).await?;
    AppLogger::log_data_change(
        member.as_str(),
        "observation",
        "create",
        &observation.id.to_string(),
    );
    Ok(observation)
}

/// Edit an existing record
///
/// # Errors
///
/// Returns a validation error for bad values and `ResourceNotFound` for unknown records
pub async fn edit_record<S>(
    store: &S,
    id: ObservationId,
    update: ObservationUpdate,
) -> AppResult<WeightObservation>
where
    S: RecordStore + ?Sized,
{
    let observation = store.update_observation(id, update).await?;
    AppLogger::log_data_change(
        observation.member_id.as_str(),
        "observation",
        "update",
        &id.to_string(),
    );
    Ok(observation)
}

/// Delete a record
///
/// # Errors
///
/// Returns `ResourceNotFound` for unknown records
pub async fn delete_record<S>(store: &S, id: ObservationId) -> AppResult<()>
where
    S: RecordStore + ?Sized,
{
    let removed = store.delete_observation(id).await?;
    AppLogger::log_data_change(
        removed.member_id.as_str(),
        "observation",
        "delete",
        &id.to_string(),
    );
    Ok(())
}

/// Delete several records at once.
///
/// Identifiers that are not found are skipped with a warning. Returns the
/// number of records deleted.
///
/// # Errors
///
/// Returns a storage error if the store fails for another reason
pub async fn delete_records<S>(store: &S, ids: &[ObservationId]) -> AppResult<usize>
where
    S: RecordStore + ?Sized,
{
    let mut deleted = 0;
    for &id in ids {
        match store.delete_observation(id).await {
            Ok(removed) => {
                AppLogger::log_data_change(
                    removed.member_id.as_str(),
                    "observation",
                    "delete",
                    &id.to_string(),
                );
                deleted += 1;
            }
            Err(StoreError::NotFound { .. }) => {
                warn!(record.id = %id, "Record to delete not found, skipping");
            }
            Err(other) => return Err(other.into()),
        }
    }
    info!(requested = ids.len(), deleted, "Bulk record delete");
    Ok(deleted)
}

/// Load up to `limit` recent records and apply the list query.
///
/// Changes are computed on the newest-first history before filtering, so a
/// filtered row still shows its change versus the record that preceded it in
/// the full history. Search and filter never change the delta shown for a
/// record, unlike a list that compares each row with its filtered neighbour.
///
/// # Errors
///
/// Returns `ResourceNotFound` for unknown or removed members
pub async fn list_records<S>(
    store: &S,
    member: &MemberId,
    query: &RecordQuery,
    limit: usize,
    today: NaiveDate,
) -> AppResult<Vec<RecordListEntry>>
where
    S: RecordStore + MemberStore + ?Sized,
{
    require_active_member(store, member).await?;
    let history = store.recent_descending(member, limit).await?;
    let changes = WeightStatistics::entry_changes(&history);
    let change_by_id: HashMap<ObservationId, Option<EntryChange>> =
        history.iter().map(|o| o.id).zip(changes).collect();

    Ok(query
        .apply(history, today)
        .into_iter()
        .map(|observation| {
            let change = change_by_id.get(&observation.id).copied().flatten();
            RecordListEntry {
                observation,
                change,
            }
        })
        .collect())
}
