// ABOUTME: Member service adding, editing, listing, and removing family members
// ABOUTME: Removal is a soft deactivation that keeps records unless a purge is requested
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;
use crate::store::{GoalStore, MemberStore, RecordStore};
use tracing::info;
use whatkg_core::models::{FamilyMember, MemberId, MemberUpdate, NewMember};

/// Add a family member
///
/// # Errors
///
/// Returns a validation error for bad names or target weights, and
/// `ResourceAlreadyExists` when the identifier is taken
pub async fn add_member<S>(store: &S, new: NewMember) -> AppResult<FamilyMember>
where
    S: MemberStore + ?Sized,
{
    let member = store.add_member(new).await?;
    AppLogger::log_data_change(member.id.as_str(), "member", "create", member.id.as_str());
    Ok(member)
}

/// Edit an active member's profile
///
/// # Errors
///
/// Returns a validation error for bad names or target weights, and
/// `ResourceNotFound` for unknown or removed members
pub async fn update_member<S>(store: &S, id: &MemberId, update: MemberUpdate) -> AppResult<FamilyMember>
where
    S: MemberStore + ?Sized,
{
    require_active_member(store, id).await?;
    let member = store.update_member(id, update).await?;
    AppLogger::log_data_change(id.as_str(), "member", "update", id.as_str());
    Ok(member)
}

/// Active members in creation order
///
/// # Errors
///
/// Returns a storage error if the store fails
pub async fn list_members<S>(store: &S) -> AppResult<Vec<FamilyMember>>
where
    S: MemberStore + ?Sized,
{
    Ok(store.list_members().await?)
}

/// Look up an active member
///
/// # Errors
///
/// Returns `ResourceNotFound` when the member does not exist or was removed
pub async fn require_active_member<S>(store: &S, id: &MemberId) -> AppResult<FamilyMember>
where
    S: MemberStore + ?Sized,
{
    store
        .get_member(id)
        .await?
        .filter(|member| member.is_active)
        .ok_or_else(|| AppError::not_found(format!("member {id}")).with_member_id(id.as_str()))
}

/// Remove a member from the family list
///
/// Records stay in the store; the active goal is cleared so it no longer
/// shows up anywhere.
///
/// # Errors
///
/// Returns `ResourceNotFound` when the member does not exist
pub async fn remove_member<S>(store: &S, id: &MemberId) -> AppResult<()>
where
    S: MemberStore + GoalStore + ?Sized,
{
    require_active_member(store, id).await?;
    store.clear_goal(id).await?;
    store.deactivate_member(id).await?;
    AppLogger::log_data_change(id.as_str(), "member", "deactivate", id.as_str());
    Ok(())
}

/// Remove a member and delete every record they have.
///
/// The member is deactivated the same way [`remove_member`] does it; goal
/// history stays. Returns the number of records deleted.
///
/// # Errors
///
/// Returns `ResourceNotFound` when the member does not exist or was removed
pub async fn purge_member<S>(store: &S, id: &MemberId) -> AppResult<usize>
where
    S: MemberStore + GoalStore + RecordStore + ?Sized,
{
    remove_member(store, id).await?;
    let deleted = store.delete_member_observations(id).await?;
    AppLogger::log_data_change(id.as_str(), "observation", "purge", id.as_str());
    info!(member.id = %id, records = deleted, "Purged member records");
    Ok(deleted)
}
