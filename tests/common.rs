// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup, date helpers, and a store with seeded members
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `whatkg`

use chrono::{DateTime, NaiveDate, Utc};
use std::env;
use std::sync::Once;
use tracing::Level;
use whatkg::models::{MemberId, NewMember, NewObservation, Relation, WeightObservation};
use whatkg::store::{InMemoryStore, MemberStore, RecordStore};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Parse a `YYYY-MM-DD` literal
pub fn day(s: &str) -> NaiveDate {
    s.parse().expect("valid test date")
}

/// Fixed instant for deterministic documents
pub fn fixed_now() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2025-07-25T09:00:00Z")
        .expect("valid timestamp")
        .with_timezone(&Utc)
}

/// Empty store with one active member
pub async fn store_with_member(id: &str) -> (InMemoryStore, MemberId) {
    init_test_logging();
    let store = InMemoryStore::new();
    let member = store
        .add_member(NewMember {
            id: Some(MemberId::new(id)),
            name: format!("Member {id}"),
            relation: Relation::Parent,
            ..NewMember::default()
        })
        .await
        .unwrap();
    (store, member.id)
}

/// Store an observation directly
pub async fn record(
    store: &InMemoryStore,
    member: &MemberId,
    date: &str,
    weight: f64,
) -> WeightObservation {
    store
        .add_observation(NewObservation {
            member_id: member.clone(),
            date: day(date),
            weight,
            memo: None,
        })
        .await
        .unwrap()
}

/// Unsaved observation for pure component tests, with increasing sequence
pub fn observation(date: &str, weight: f64, sequence: u64) -> WeightObservation {
    WeightObservation::from_new(
        NewObservation {
            member_id: MemberId::new("test"),
            date: day(date),
            weight,
            memo: None,
        },
        fixed_now(),
        sequence,
    )
}
