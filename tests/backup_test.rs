// ABOUTME: Integration tests for backup export, file persistence, and import
// ABOUTME: Verifies a round trip through a data file reproduces members, records, and goals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{day, fixed_now, init_test_logging, record};
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use whatkg::backup::{
    export_document, import_document, load_document, load_or_empty, save_document,
};
use whatkg::config::{AppSettings, Theme};
use whatkg::models::{GoalType, MemberId, NewGoal, NewMember, ObservationUpdate, Relation};
use whatkg::services::{members, records};
use whatkg::store::{GoalStore, InMemoryStore, MemberStore, RecordStore};
use whatkg::units::WeightUnit;

async fn seeded_store() -> InMemoryStore {
    init_test_logging();
    let store = InMemoryStore::new();
    for (id, name, relation) in [("dad", "Dad", Relation::Parent), ("kid", "Kid", Relation::Child)] {
        store
            .add_member(NewMember {
                id: Some(MemberId::new(id)),
                name: name.into(),
                relation,
                ..NewMember::default()
            })
            .await
            .unwrap();
    }
    let dad = MemberId::new("dad");
    let kid = MemberId::new("kid");
    record(&store, &dad, "2025-07-01", 72.0).await;
    record(&store, &dad, "2025-07-08", 71.4).await;
    record(&store, &dad, "2025-07-15", 71.1).await;
    record(&store, &kid, "2025-07-02", 31.5).await;

    store
        .set_goal(
            &dad,
            NewGoal {
                start_weight: 72.0,
                target_weight: 69.0,
                target_date: day("2025-10-01"),
                goal_type: GoalType::Lose,
                weekly_target: 0.4,
            },
        )
        .await
        .unwrap();
    store
}

#[tokio::test]
async fn test_round_trip_through_data_file() {
    let source = seeded_store().await;
    let mut settings = AppSettings::default();
    settings.set_unit(WeightUnit::Lb, fixed_now());
    settings.set_theme(Theme::Dark, fixed_now());

    let document = export_document(&source, &settings, fixed_now()).await.unwrap();
    assert_eq!(document.members.len(), 2);
    assert_eq!(document.observation_count(), 4);

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("whatkg.json");
    save_document(&path, &document).unwrap();
    let loaded = load_document(&path).unwrap();
    assert_eq!(loaded, document);

    let target = InMemoryStore::new();
    let imported = import_document(&target, &loaded).await.unwrap();
    assert_eq!(imported, 4);
    assert_eq!(loaded.settings.unit, WeightUnit::Lb);
    assert_eq!(loaded.settings.theme, Theme::Dark);

    let names: Vec<_> = target
        .list_members()
        .await
        .unwrap()
        .into_iter()
        .map(|m| m.name)
        .collect();
    assert_eq!(names, vec!["Dad", "Kid"]);

    let dad = MemberId::new("dad");
    assert_eq!(target.count_observations(&dad).await.unwrap(), 3);
    assert_eq!(target.count_observations(&MemberId::new("kid")).await.unwrap(), 1);

    let goal = target.active_goal(&dad).await.unwrap().unwrap();
    assert!((goal.target_weight - 69.0).abs() < f64::EPSILON);
    assert!(target.active_goal(&MemberId::new("kid")).await.unwrap().is_none());

    let latest = target.latest_observation(&dad).await.unwrap().unwrap();
    assert_eq!(latest.date, day("2025-07-15"));
}

/// Save a store to a data file and load it into a fresh store, like two CLI runs
async fn reload(store: &InMemoryStore, path: &Path) -> InMemoryStore {
    let document = export_document(store, &AppSettings::default(), fixed_now())
        .await
        .unwrap();
    save_document(path, &document).unwrap();

    let fresh = InMemoryStore::new();
    import_document(&fresh, &load_document(path).unwrap())
        .await
        .unwrap();
    fresh
}

#[tokio::test]
async fn test_record_ids_survive_the_data_file() {
    let source = seeded_store().await;
    let dad = MemberId::new("dad");
    let morning = record(&source, &dad, "2025-07-20", 70.9).await;
    let evening = record(&source, &dad, "2025-07-20", 71.2).await;
    let latest_before = source.latest_observation(&dad).await.unwrap().unwrap();
    assert_eq!(latest_before.id, evening.id);

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("whatkg.json");
    let loaded = reload(&source, &path).await;

    let latest_after = loaded.latest_observation(&dad).await.unwrap().unwrap();
    assert_eq!(latest_after.id, evening.id);
    assert_eq!(latest_after.created_at, evening.created_at);

    let edited = records::edit_record(
        &loaded,
        morning.id,
        ObservationUpdate {
            weight: Some(70.8),
            ..ObservationUpdate::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(edited.id, morning.id);
    records::delete_record(&loaded, evening.id).await.unwrap();

    let again = reload(&loaded, &path).await;
    assert_eq!(again.count_observations(&dad).await.unwrap(), 4);
    let latest = again.latest_observation(&dad).await.unwrap().unwrap();
    assert_eq!(latest.id, morning.id);
    assert!((latest.weight - 70.8).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_goal_history_and_removed_members_survive_the_data_file() {
    let source = seeded_store().await;
    let dad = MemberId::new("dad");
    let kid = MemberId::new("kid");
    source
        .set_goal(
            &dad,
            NewGoal {
                start_weight: 71.1,
                target_weight: 68.0,
                target_date: day("2025-12-01"),
                goal_type: GoalType::Lose,
                weekly_target: 0.2,
            },
        )
        .await
        .unwrap();
    members::remove_member(&source, &kid).await.unwrap();
    let history_before = source.goal_history(&dad).await.unwrap();

    let dir = TempDir::new().unwrap();
    let loaded = reload(&source, &dir.path().join("whatkg.json")).await;

    let history = loaded.goal_history(&dad).await.unwrap();
    assert_eq!(history, history_before);
    assert_eq!(history.len(), 2);
    assert!(history[0].is_active);
    assert!(!history[1].is_active);

    let names: Vec<_> = loaded
        .list_members()
        .await
        .unwrap()
        .into_iter()
        .map(|m| m.name)
        .collect();
    assert_eq!(names, vec!["Dad"]);
    let removed = loaded.get_member(&kid).await.unwrap().unwrap();
    assert!(!removed.is_active);
    assert_eq!(loaded.count_observations(&kid).await.unwrap(), 1);
}

#[tokio::test]
async fn test_import_into_populated_store_renames_conflicts() {
    let source = seeded_store().await;
    let document = export_document(&source, &AppSettings::default(), fixed_now())
        .await
        .unwrap();

    let imported = import_document(&source, &document).await.unwrap();
    assert_eq!(imported, 4);
    assert_eq!(source.list_members().await.unwrap().len(), 4);
    assert_eq!(source.count_observations(&MemberId::new("dad")).await.unwrap(), 3);
}

#[test]
fn test_missing_data_file_starts_empty() {
    let dir = TempDir::new().unwrap();
    let document = load_or_empty(&dir.path().join("absent.json"), fixed_now()).unwrap();
    assert!(document.members.is_empty());
    assert_eq!(document.settings, AppSettings::default());
}

#[test]
fn test_unreadable_document_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, r#"{"version": 1, "members": "nope"}"#).unwrap();
    assert!(load_document(&path).is_err());
}
