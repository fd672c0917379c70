// ABOUTME: Tests for the JSON wire format of domain models
// ABOUTME: Pins the Croatian field values and optional-field behavior clients depend on
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sparta Sports Club

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{NaiveDate, NaiveTime};
use serde_json::json;
use sparta_server::models::{
    Group, Member, MemberStatus, Membership, TrainingSession, Weekday,
};

#[test]
fn test_member_serializes_croatian_values() {
    let member = Member {
        id: 1,
        ime: "Ana".into(),
        prezime: "Marić".into(),
        email: "ana@test.com".into(),
        mobitel: "0912345678".into(),
        grupa: Group::Beginner,
        status: MemberStatus::Active,
        termin: None,
    };

    let value = serde_json::to_value(&member).unwrap();
    assert_eq!(value["grupa"], "početni");
    assert_eq!(value["status"], "aktivan");
    // Unassigned members carry no termin field at all
    assert!(value.get("termin").is_none());
}

#[test]
fn test_member_termin_appears_when_assigned() {
    let member = Member {
        id: 1,
        ime: "Ana".into(),
        prezime: "Marić".into(),
        email: "ana@test.com".into(),
        mobitel: "0912345678".into(),
        grupa: Group::Advanced,
        status: MemberStatus::Inactive,
        termin: Some(5),
    };

    let value = serde_json::to_value(&member).unwrap();
    assert_eq!(value["termin"], 5);
    assert_eq!(value["grupa"], "napredni");
    assert_eq!(value["status"], "neaktivan");
}

#[test]
fn test_session_wire_format() {
    let session = TrainingSession {
        id: 3,
        grupa: Group::Intermediate,
        dan: Weekday::Tuesday,
        vrijeme: NaiveTime::from_hms_opt(19, 0, 0).unwrap(),
        max_clanova: 10,
    };

    let value = serde_json::to_value(&session).unwrap();
    assert_eq!(value["grupa"], "srednji");
    assert_eq!(value["dan"], "utorak");
    assert_eq!(value["vrijeme"], "19:00:00");
    assert_eq!(value["max_clanova"], 10);

    let parsed: TrainingSession = serde_json::from_value(value).unwrap();
    assert_eq!(parsed, session);
}

#[test]
fn test_membership_dates_are_iso() {
    let membership = Membership {
        datum_uplate: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
        datum_isteka: NaiveDate::from_ymd_opt(2026, 1, 10).unwrap(),
        iznos: 400.0,
        status: "plaćeno".into(),
    };

    let value = serde_json::to_value(&membership).unwrap();
    assert_eq!(value["datum_uplate"], "2025-01-10");
    assert_eq!(value["datum_isteka"], "2026-01-10");
}

#[test]
fn test_all_weekdays_roundtrip() {
    for dan in [
        "ponedjeljak",
        "utorak",
        "srijeda",
        "četvrtak",
        "petak",
        "subota",
    ] {
        let weekday: Weekday = serde_json::from_value(json!(dan)).unwrap();
        assert_eq!(serde_json::to_value(weekday).unwrap(), json!(dan));
    }
    // Sunday is not a training day
    assert!(serde_json::from_value::<Weekday>(json!("nedjelja")).is_err());
}
