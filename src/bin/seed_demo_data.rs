// ABOUTME: Demo data seeder for the Sparta membership API
// ABOUTME: Populates the entity store with a realistic club schedule and roster
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sparta Sports Club

//! Demo data seeder for the Sparta membership API.
//!
//! Populates the configured entity store with a weekly training schedule,
//! a handful of members across all groups, their membership fee records,
//! and session assignments.
//!
//! Usage:
//! ```bash
//! # Seed the store configured in DATABASE_URL
//! cargo run --bin seed-demo-data
//!
//! # Seed a specific store
//! cargo run --bin seed-demo-data -- --database-url sqlite:data/demo.db
//! ```

use anyhow::Result;
use chrono::{NaiveDate, NaiveTime};
use clap::Parser;
use sparta_server::{
    config::environment::ServerConfig,
    logging,
    models::{NewMember, NewMembership, NewSession},
    services::EnrollmentEngine,
    store::{factory::Database, EntityStore},
};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "seed-demo-data",
    about = "Sparta Membership API Demo Data Seeder",
    long_about = "Populate the entity store with a realistic schedule and roster"
)]
struct SeedArgs {
    /// Database URL override
    #[arg(long)]
    database_url: Option<String>,
}

/// Weekly schedule: (id, group, day, time, capacity)
const SESSIONS: &[(i64, &str, &str, (u32, u32), i64)] = &[
    (1, "početni", "ponedjeljak", (18, 0), 12),
    (2, "početni", "srijeda", (18, 0), 12),
    (3, "srednji", "utorak", (19, 0), 10),
    (4, "srednji", "četvrtak", (19, 0), 10),
    (5, "napredni", "petak", (20, 0), 8),
    (6, "napredni", "subota", (10, 0), 8),
];

/// Roster: (id, first, last, email, phone, group, status, session)
const MEMBERS: &[(i64, &str, &str, &str, &str, &str, &str, Option<i64>)] = &[
    (1, "Ana", "Marić", "ana.maric@example.com", "0911234567", "početni", "aktivan", Some(1)),
    (2, "Marko", "Horvat", "marko.horvat@example.com", "0922345678", "početni", "aktivan", Some(1)),
    (3, "Ivana", "Kovačević", "ivana.kovacevic@example.com", "0953456789", "srednji", "aktivan", Some(3)),
    (4, "Petar", "Babić", "petar.babic@example.com", "0914567890", "srednji", "aktivan", Some(4)),
    (5, "Lucija", "Jurić", "lucija.juric@example.com", "0925678901", "napredni", "aktivan", Some(5)),
    (6, "Tomislav", "Novak", "tomislav.novak@example.com", "0986789012", "napredni", "aktivan", Some(6)),
    (7, "Maja", "Knežević", "maja.knezevic@example.com", "0917890123", "srednji", "neaktivan", None),
    (8, "Luka", "Pavić", "luka.pavic@example.com", "0958901234", "početni", "neaktivan", None),
];

#[tokio::main]
async fn main() -> Result<()> {
    let args = SeedArgs::parse();

    logging::init_from_env()?;

    let config = ServerConfig::from_env()?;
    let database_url = args.database_url.unwrap_or(config.database_url);

    let database = Database::connect(&database_url).await?;
    info!("Seeding entity store: {}", database.backend_info());

    seed_sessions(&database).await?;
    seed_members(&database).await?;
    seed_memberships(&database).await?;
    seed_assignments(&database).await?;

    info!("Demo data seeded successfully");
    Ok(())
}

async fn seed_sessions(database: &Database) -> Result<()> {
    for &(id, grupa, dan, (hour, minute), max_clanova) in SESSIONS {
        let session = NewSession {
            id,
            grupa: grupa.into(),
            dan: dan.into(),
            vrijeme: NaiveTime::from_hms_opt(hour, minute, 0)
                .ok_or_else(|| anyhow::anyhow!("invalid seed time {hour}:{minute}"))?,
            max_clanova,
        }
        .validate()
        .map_err(|e| anyhow::anyhow!("seed session {id}: {e}"))?;

        database.put_session(&session).await?;
    }
    info!("Seeded {} training sessions", SESSIONS.len());
    Ok(())
}

async fn seed_members(database: &Database) -> Result<()> {
    for &(id, ime, prezime, email, mobitel, grupa, status, _) in MEMBERS {
        let member = NewMember {
            id,
            ime: ime.into(),
            prezime: prezime.into(),
            email: email.into(),
            mobitel: mobitel.into(),
            grupa: grupa.into(),
            status: status.into(),
        }
        .validate()
        .map_err(|e| anyhow::anyhow!("seed member {id}: {e}"))?;

        database.put_member(&member).await?;
    }
    info!("Seeded {} members", MEMBERS.len());
    Ok(())
}

async fn seed_memberships(database: &Database) -> Result<()> {
    let mut seeded = 0;
    for &(id, _, _, _, _, _, status, _) in MEMBERS {
        // Inactive members have no current fee record
        if status != "aktivan" {
            continue;
        }

        let membership = NewMembership {
            datum_uplate: NaiveDate::from_ymd_opt(2025, 1, 10)
                .ok_or_else(|| anyhow::anyhow!("invalid seed date"))?,
            datum_isteka: NaiveDate::from_ymd_opt(2026, 1, 10)
                .ok_or_else(|| anyhow::anyhow!("invalid seed date"))?,
            iznos: 400.0,
            status: "plaćeno".into(),
        }
        .validate()
        .map_err(|e| anyhow::anyhow!("seed membership {id}: {e}"))?;

        database.put_membership(id, &membership).await?;
        seeded += 1;
    }
    info!("Seeded {seeded} membership records");
    Ok(())
}

async fn seed_assignments(database: &Database) -> Result<()> {
    let enrollment = EnrollmentEngine::new(database.clone());
    let mut assigned = 0;
    for &(id, _, _, _, _, _, _, session) in MEMBERS {
        if let Some(session_id) = session {
            enrollment
                .assign(id, session_id)
                .await
                .map_err(|e| anyhow::anyhow!("seed assignment {id} -> {session_id}: {e}"))?;
            assigned += 1;
        }
    }
    info!("Assigned {assigned} members to sessions");
    Ok(())
}
