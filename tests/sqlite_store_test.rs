// ABOUTME: Integration tests for the SQLite entity store backend
// ABOUTME: Validates round-trips, deletes, and email uniqueness checks against a real file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sparta Sports Club

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use anyhow::Result;
use chrono::{NaiveDate, NaiveTime};
use sparta_server::models::{NewMember, NewMembership, NewSession};
use sparta_server::store::{sqlite::SqliteStore, EntityStore};
use tempfile::TempDir;

/// Create a store backed by a file in a fresh temporary directory
async fn create_test_store() -> Result<(SqliteStore, TempDir)> {
    let dir = TempDir::new()?;
    let url = format!("sqlite:{}", dir.path().join("test.db").display());
    let store = SqliteStore::new(&url).await?;
    Ok((store, dir))
}

#[tokio::test]
async fn test_member_roundtrip_and_delete() -> Result<()> {
    let (store, _dir) = create_test_store().await?;

    let member = NewMember {
        id: 1,
        ime: "Ana".into(),
        prezime: "Marić".into(),
        email: "ana.maric@test.com".into(),
        mobitel: "091/234-5678".into(),
        grupa: "početni".into(),
        status: "aktivan".into(),
    }
    .validate()
    .unwrap();

    store.put_member(&member).await?;
    let loaded = store.get_member(1).await?.unwrap();
    assert_eq!(loaded, member);
    // Phone survives storage in its normalized form
    assert_eq!(loaded.mobitel, "0912345678");

    store.delete_member(1).await?;
    assert!(store.get_member(1).await?.is_none());

    // Deleting an absent member is a no-op
    store.delete_member(1).await?;
    Ok(())
}

#[tokio::test]
async fn test_member_termin_persists() -> Result<()> {
    let (store, _dir) = create_test_store().await?;

    let mut member = NewMember {
        id: 2,
        ime: "Marko".into(),
        prezime: "Horvat".into(),
        email: "marko@test.com".into(),
        mobitel: "0922345678".into(),
        grupa: "srednji".into(),
        status: "aktivan".into(),
    }
    .validate()
    .unwrap();

    store.put_member(&member).await?;
    assert_eq!(store.get_member(2).await?.unwrap().termin, None);

    member.termin = Some(7);
    store.put_member(&member).await?;
    assert_eq!(store.get_member(2).await?.unwrap().termin, Some(7));
    Ok(())
}

#[tokio::test]
async fn test_email_exists() -> Result<()> {
    let (store, _dir) = create_test_store().await?;

    let member = NewMember {
        id: 1,
        ime: "Ana".into(),
        prezime: "Marić".into(),
        email: "ana.maric@test.com".into(),
        mobitel: "0912345678".into(),
        grupa: "početni".into(),
        status: "aktivan".into(),
    }
    .validate()
    .unwrap();
    store.put_member(&member).await?;

    assert!(store.email_exists("ana.maric@test.com").await?);
    assert!(!store.email_exists("nobody@test.com").await?);
    Ok(())
}

#[tokio::test]
async fn test_session_roundtrip_and_listing_order() -> Result<()> {
    let (store, _dir) = create_test_store().await?;

    for id in [3, 1, 2] {
        let session = NewSession {
            id,
            grupa: "napredni".into(),
            dan: "subota".into(),
            vrijeme: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            max_clanova: 8,
        }
        .validate()
        .unwrap();
        store.put_session(&session).await?;
    }

    let loaded = store.get_session(3).await?.unwrap();
    assert_eq!(loaded.vrijeme, NaiveTime::from_hms_opt(10, 0, 0).unwrap());
    assert_eq!(loaded.max_clanova, 8);

    let all = store.list_sessions().await?;
    let ids: Vec<i64> = all.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    Ok(())
}

#[tokio::test]
async fn test_membership_roundtrip_replace_delete() -> Result<()> {
    let (store, _dir) = create_test_store().await?;

    let first = NewMembership {
        datum_uplate: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
        datum_isteka: NaiveDate::from_ymd_opt(2025, 7, 10).unwrap(),
        iznos: 200.0,
        status: "plaćeno".into(),
    }
    .validate()
    .unwrap();

    store.put_membership(5, &first).await?;
    assert_eq!(store.get_membership(5).await?.unwrap(), first);

    // A renewal replaces the record wholesale
    let renewal = NewMembership {
        datum_uplate: NaiveDate::from_ymd_opt(2025, 7, 10).unwrap(),
        datum_isteka: NaiveDate::from_ymd_opt(2026, 7, 10).unwrap(),
        iznos: 400.0,
        status: "plaćeno".into(),
    }
    .validate()
    .unwrap();
    store.put_membership(5, &renewal).await?;

    let loaded = store.get_membership(5).await?.unwrap();
    assert_eq!(loaded, renewal);

    store.delete_membership(5).await?;
    assert!(store.get_membership(5).await?.is_none());
    Ok(())
}
