// ABOUTME: Integration tests for the in-memory store
// ABOUTME: Covers goal supersede, same-date ordering, range queries, and member lifecycle
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{day, record, store_with_member};
use std::sync::Arc;
use whatkg::models::{GoalType, MemberId, NewGoal, NewMember, ObservationUpdate};
use whatkg::store::{GoalStore, InMemoryStore, MemberStore, RecordStore, StoreError};

fn new_goal(target: f64) -> NewGoal {
    NewGoal {
        start_weight: 80.0,
        target_weight: target,
        target_date: day("2025-12-31"),
        goal_type: GoalType::Lose,
        weekly_target: 0.5,
    }
}

#[tokio::test]
async fn test_second_goal_supersedes_first() {
    let (store, member) = store_with_member("dad").await;

    let first = store.set_goal(&member, new_goal(75.0)).await.unwrap();
    let second = store.set_goal(&member, new_goal(72.0)).await.unwrap();

    let active = store.active_goal(&member).await.unwrap().unwrap();
    assert_eq!(active.id, second.id);

    let history = store.goal_history(&member).await.unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history.iter().filter(|g| g.is_active).count(), 1);
    assert_eq!(history[0].id, second.id);
    assert_eq!(history[1].id, first.id);
    assert!(!history[1].is_active);
}

#[tokio::test]
async fn test_concurrent_goal_updates_leave_one_active() {
    let (store, member) = store_with_member("mom").await;
    let store = Arc::new(store);

    let handles: Vec<_> = (0..16)
        .map(|i| {
            let store = Arc::clone(&store);
            let member = member.clone();
            tokio::spawn(async move {
                store
                    .set_goal(&member, new_goal(70.0 + f64::from(i) / 10.0))
                    .await
                    .unwrap()
            })
        })
        .collect();
    for handle in handles {
        handle.await.unwrap();
    }

    let history = store.goal_history(&member).await.unwrap();
    assert_eq!(history.len(), 16);
    assert_eq!(history.iter().filter(|g| g.is_active).count(), 1);
}

#[tokio::test]
async fn test_same_date_later_entry_is_latest() {
    let (store, member) = store_with_member("kid").await;
    record(&store, &member, "2025-07-01", 40.0).await;
    let later = record(&store, &member, "2025-07-01", 40.4).await;

    let latest = store.latest_observation(&member).await.unwrap().unwrap();
    assert_eq!(latest.id, later.id);

    let recent = store.recent_descending(&member, 10).await.unwrap();
    assert_eq!(recent[0].id, later.id);
}

#[tokio::test]
async fn test_range_is_inclusive_and_ascending() {
    let (store, member) = store_with_member("dad").await;
    record(&store, &member, "2025-07-10", 71.0).await;
    record(&store, &member, "2025-07-01", 72.0).await;
    record(&store, &member, "2025-07-20", 70.5).await;
    record(&store, &member, "2025-06-30", 72.5).await;

    let range = store
        .range_ascending(&member, day("2025-07-01"), day("2025-07-20"))
        .await
        .unwrap();
    let dates: Vec<_> = range.iter().map(|o| o.date.to_string()).collect();
    assert_eq!(dates, vec!["2025-07-01", "2025-07-10", "2025-07-20"]);

    let recent = store.recent_descending(&member, 2).await.unwrap();
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].date, day("2025-07-20"));
    assert_eq!(recent[1].date, day("2025-07-10"));
}

#[tokio::test]
async fn test_update_and_delete_observation() {
    let (store, member) = store_with_member("dad").await;
    let observation = record(&store, &member, "2025-07-01", 72.0).await;

    let updated = store
        .update_observation(
            observation.id,
            ObservationUpdate {
                weight: Some(71.6),
                memo: Some("morning".into()),
                ..ObservationUpdate::default()
            },
        )
        .await
        .unwrap();
    assert!((updated.weight - 71.6).abs() < f64::EPSILON);
    assert_eq!(updated.memo.as_deref(), Some("morning"));

    let bad = store
        .update_observation(
            observation.id,
            ObservationUpdate {
                weight: Some(0.0),
                ..ObservationUpdate::default()
            },
        )
        .await;
    assert!(matches!(bad, Err(StoreError::Invalid(_))));

    let removed = store.delete_observation(observation.id).await.unwrap();
    assert_eq!(removed.id, observation.id);
    assert_eq!(store.count_observations(&member).await.unwrap(), 0);
    assert!(matches!(
        store.delete_observation(observation.id).await,
        Err(StoreError::NotFound { .. })
    ));
}

#[tokio::test]
async fn test_members_listed_in_creation_order() {
    let store = InMemoryStore::new();
    for name in ["Dad", "Mom", "Kid"] {
        store
            .add_member(NewMember {
                id: Some(MemberId::new(name.to_lowercase())),
                name: name.into(),
                ..NewMember::default()
            })
            .await
            .unwrap();
    }
    store.deactivate_member(&MemberId::new("mom")).await.unwrap();

    let names: Vec<_> = store
        .list_members()
        .await
        .unwrap()
        .into_iter()
        .map(|m| m.name)
        .collect();
    assert_eq!(names, vec!["Dad", "Kid"]);
}

#[tokio::test]
async fn test_delete_member_observations_counts_removed() {
    let (store, member) = store_with_member("dad").await;
    record(&store, &member, "2025-07-01", 72.0).await;
    record(&store, &member, "2025-07-02", 71.8).await;

    assert_eq!(store.delete_member_observations(&member).await.unwrap(), 2);
    assert!(store.latest_observation(&member).await.unwrap().is_none());
}
