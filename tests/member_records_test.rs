// ABOUTME: Integration tests for member editing, record purging, and bulk record deletion
// ABOUTME: Exercises the member and record services against the in-memory store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{record, store_with_member};
use uuid::Uuid;
use whatkg::errors::ErrorCode;
use whatkg::models::{MemberId, MemberUpdate, Relation};
use whatkg::services::{members, records};
use whatkg::store::{GoalStore, MemberStore, RecordStore};

#[tokio::test]
async fn test_update_member_changes_profile() {
    let (store, member) = store_with_member("mom").await;

    let updated = members::update_member(
        &store,
        &member,
        MemberUpdate {
            name: Some("  Mother ".into()),
            relation: Some(Relation::Spouse),
            target_weight: Some(58.0),
            ..MemberUpdate::default()
        },
    )
    .await
    .unwrap();

    assert_eq!(updated.name, "Mother");
    assert_eq!(updated.relation, Relation::Spouse);
    assert_eq!(updated.target_weight, Some(58.0));
    assert_eq!(store.get_member(&member).await.unwrap().unwrap().name, "Mother");
}

#[tokio::test]
async fn test_update_member_rejects_blank_name_and_removed_members() {
    let (store, member) = store_with_member("mom").await;

    let err = members::update_member(
        &store,
        &member,
        MemberUpdate {
            name: Some("   ".into()),
            ..MemberUpdate::default()
        },
    )
    .await
    .unwrap_err();
    assert_eq!(err.code, ErrorCode::MissingRequiredField);

    members::remove_member(&store, &member).await.unwrap();
    let err = members::update_member(&store, &member, MemberUpdate::default())
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn test_purge_member_deletes_records() {
    let (store, member) = store_with_member("kid").await;
    record(&store, &member, "2025-07-01", 30.2).await;
    record(&store, &member, "2025-07-08", 30.5).await;

    let deleted = members::purge_member(&store, &member).await.unwrap();

    assert_eq!(deleted, 2);
    assert_eq!(store.count_observations(&member).await.unwrap(), 0);
    assert!(store.list_members().await.unwrap().is_empty());
    assert!(store.active_goal(&member).await.unwrap().is_none());

    let err = members::purge_member(&store, &MemberId::new("ghost"))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn test_delete_records_skips_unknown_ids() {
    let (store, member) = store_with_member("dad").await;
    let first = record(&store, &member, "2025-07-01", 72.0).await;
    let second = record(&store, &member, "2025-07-02", 71.8).await;
    let kept = record(&store, &member, "2025-07-03", 71.6).await;

    let deleted = records::delete_records(&store, &[first.id, Uuid::new_v4(), second.id, first.id])
        .await
        .unwrap();

    assert_eq!(deleted, 2);
    let remaining = store.recent_descending(&member, 10).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, kept.id);
    assert_eq!(records::delete_records(&store, &[]).await.unwrap(), 0);
}
