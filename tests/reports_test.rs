// ABOUTME: Integration tests for the reporting engine
// ABOUTME: Validates occupancy rows and active-per-group counts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sparta Sports Club

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::NaiveTime;
use sparta_server::models::{Group, NewMember, NewSession};
use sparta_server::services::{EnrollmentEngine, ReportingEngine};
use sparta_server::store::{factory::Database, EntityStore};

async fn seed_member(store: &Database, id: i64, grupa: &str, status: &str) {
    let member = NewMember {
        id,
        ime: format!("Ime{id}"),
        prezime: format!("Prezime{id}"),
        email: format!("member{id}@test.com"),
        mobitel: "0911234567".into(),
        grupa: grupa.into(),
        status: status.into(),
    }
    .validate()
    .unwrap();
    store.put_member(&member).await.unwrap();
}

async fn seed_session(store: &Database, id: i64, grupa: &str, max_clanova: i64) {
    let session = NewSession {
        id,
        grupa: grupa.into(),
        dan: "petak".into(),
        vrijeme: NaiveTime::from_hms_opt(20, 0, 0).unwrap(),
        max_clanova,
    }
    .validate()
    .unwrap();
    store.put_session(&session).await.unwrap();
}

#[tokio::test]
async fn test_occupancy_tracks_assignments() {
    let store = Database::in_memory();
    let enrollment = EnrollmentEngine::new(store.clone());
    let reporting = ReportingEngine::new(store.clone());

    seed_session(&store, 1, "srednji", 10).await;
    seed_session(&store, 2, "napredni", 8).await;
    seed_member(&store, 1, "srednji", "aktivan").await;
    seed_member(&store, 2, "srednji", "aktivan").await;

    let before = reporting.occupancy().await.unwrap();
    assert_eq!(before.len(), 2);
    assert_eq!(before[0].upisani, 0);
    assert_eq!(before[0].preostalo, 10);

    enrollment.assign(1, 1).await.unwrap();
    enrollment.assign(2, 1).await.unwrap();

    let after = reporting.occupancy().await.unwrap();
    // Rows come back ordered by session id
    assert_eq!(after[0].session_id, 1);
    assert_eq!(after[0].upisani, 2);
    assert_eq!(after[0].preostalo, 8);
    assert_eq!(after[1].session_id, 2);
    assert_eq!(after[1].upisani, 0);
    assert_eq!(after[1].preostalo, 8);
}

#[tokio::test]
async fn test_occupancy_remaining_floors_at_zero() {
    let store = Database::in_memory();
    let reporting = ReportingEngine::new(store.clone());

    seed_session(&store, 1, "početni", 1).await;
    // Two members point at the same session straight through the store,
    // which the engine would never allow
    seed_member(&store, 1, "početni", "aktivan").await;
    seed_member(&store, 2, "početni", "aktivan").await;
    for id in [1, 2] {
        let mut member = store.get_member(id).await.unwrap().unwrap();
        member.termin = Some(1);
        store.put_member(&member).await.unwrap();
    }

    let rows = reporting.occupancy().await.unwrap();
    assert_eq!(rows[0].upisani, 2);
    assert_eq!(rows[0].preostalo, 0);
}

#[tokio::test]
async fn test_active_per_group_includes_zero_groups() {
    let store = Database::in_memory();
    let reporting = ReportingEngine::new(store.clone());

    seed_member(&store, 1, "početni", "aktivan").await;
    seed_member(&store, 2, "početni", "aktivan").await;
    seed_member(&store, 3, "srednji", "neaktivan").await;

    let counts = reporting.active_per_group().await.unwrap();

    // Every group appears even when nobody trains in it
    assert_eq!(counts.len(), Group::ALL.len());
    assert_eq!(counts[&Group::Beginner], 2);
    assert_eq!(counts[&Group::Intermediate], 0);
    assert_eq!(counts[&Group::Advanced], 0);

    let total: u64 = counts.values().sum();
    assert_eq!(total, 2);
}
