// ABOUTME: SQLite entity store implementation backed by sqlx
// ABOUTME: Creates its own schema on connect; stores members, sessions, and memberships
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sparta Sports Club

//! SQLite entity store implementation
//!
//! Each entity lives in its own table keyed by its numeric id, matching the
//! key-value contract in [`EntityStore`]. The schema is created on connect.

use std::str::FromStr;

use anyhow::Result;
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use sqlx::{Pool, Row, Sqlite, SqlitePool};

use super::EntityStore;
use crate::models::{Group, Member, MemberStatus, Membership, TrainingSession, Weekday};

/// SQLite entity store
#[derive(Clone)]
pub struct SqliteStore {
    pool: Pool<Sqlite>,
}

impl SqliteStore {
    /// Create a new store connection and run migrations
    ///
    /// # Errors
    ///
    /// Returns an error if the connection fails or the schema cannot be
    /// created.
    pub async fn new(database_url: &str) -> Result<Self> {
        // Ensure SQLite creates the database file if it doesn't exist
        let connection_options = if database_url.starts_with("sqlite:") {
            format!("{database_url}?mode=rwc")
        } else {
            database_url.to_string()
        };

        let pool = SqlitePool::connect(&connection_options).await?;

        let store = Self { pool };
        store.migrate().await?;

        Ok(store)
    }

    /// Run schema migrations (idempotent)
    pub async fn migrate(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS members (
                id INTEGER PRIMARY KEY,
                ime TEXT NOT NULL,
                prezime TEXT NOT NULL,
                email TEXT UNIQUE NOT NULL,
                mobitel TEXT NOT NULL,
                grupa TEXT NOT NULL,
                status TEXT NOT NULL,
                termin INTEGER
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_members_email ON members(email)")
            .execute(&self.pool)
            .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS sessions (
                id INTEGER PRIMARY KEY,
                grupa TEXT NOT NULL,
                dan TEXT NOT NULL,
                vrijeme TEXT NOT NULL,
                max_clanova INTEGER NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS memberships (
                member_id INTEGER PRIMARY KEY,
                datum_uplate TEXT NOT NULL,
                datum_isteka TEXT NOT NULL,
                iznos REAL NOT NULL,
                status TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    fn row_to_member(row: &sqlx::sqlite::SqliteRow) -> Result<Member> {
        Ok(Member {
            id: row.get("id"),
            ime: row.get("ime"),
            prezime: row.get("prezime"),
            email: row.get("email"),
            mobitel: row.get("mobitel"),
            grupa: Group::from_str(row.get("grupa"))?,
            status: MemberStatus::from_str(row.get("status"))?,
            termin: row.get("termin"),
        })
    }

    fn row_to_session(row: &sqlx::sqlite::SqliteRow) -> Result<TrainingSession> {
        let vrijeme: String = row.get("vrijeme");
        let max_clanova: i64 = row.get("max_clanova");
        Ok(TrainingSession {
            id: row.get("id"),
            grupa: Group::from_str(row.get("grupa"))?,
            dan: Weekday::from_str(row.get("dan"))?,
            vrijeme: NaiveTime::parse_from_str(&vrijeme, "%H:%M:%S")?,
            // Safe: capacity is bounds-checked to [1,20] before it reaches storage
            #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
            max_clanova: max_clanova as u32,
        })
    }

    fn row_to_membership(row: &sqlx::sqlite::SqliteRow) -> Result<Membership> {
        let datum_uplate: String = row.get("datum_uplate");
        let datum_isteka: String = row.get("datum_isteka");
        Ok(Membership {
            datum_uplate: NaiveDate::parse_from_str(&datum_uplate, "%Y-%m-%d")?,
            datum_isteka: NaiveDate::parse_from_str(&datum_isteka, "%Y-%m-%d")?,
            iznos: row.get("iznos"),
            status: row.get("status"),
        })
    }
}

#[async_trait]
impl EntityStore for SqliteStore {
    async fn put_member(&self, member: &Member) -> Result<()> {
        sqlx::query(
            r"
            INSERT OR REPLACE INTO members (id, ime, prezime, email, mobitel, grupa, status, termin)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            ",
        )
        .bind(member.id)
        .bind(&member.ime)
        .bind(&member.prezime)
        .bind(&member.email)
        .bind(&member.mobitel)
        .bind(member.grupa.as_str())
        .bind(member.status.as_str())
        .bind(member.termin)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn get_member(&self, id: i64) -> Result<Option<Member>> {
        let row = sqlx::query("SELECT * FROM members WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => Ok(Some(Self::row_to_member(&row)?)),
            None => Ok(None),
        }
    }

    async fn list_members(&self) -> Result<Vec<Member>> {
        let rows = sqlx::query("SELECT * FROM members ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(Self::row_to_member).collect()
    }

    async fn delete_member(&self, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM members WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn email_exists(&self, email: &str) -> Result<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM members WHERE email = ?1")
            .bind(email)
            .fetch_one(&self.pool)
            .await?;

        Ok(count > 0)
    }

    async fn put_session(&self, session: &TrainingSession) -> Result<()> {
        sqlx::query(
            r"
            INSERT OR REPLACE INTO sessions (id, grupa, dan, vrijeme, max_clanova)
            VALUES (?1, ?2, ?3, ?4, ?5)
            ",
        )
        .bind(session.id)
        .bind(session.grupa.as_str())
        .bind(session.dan.as_str())
        .bind(session.vrijeme.format("%H:%M:%S").to_string())
        .bind(i64::from(session.max_clanova))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn get_session(&self, id: i64) -> Result<Option<TrainingSession>> {
        let row = sqlx::query("SELECT * FROM sessions WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => Ok(Some(Self::row_to_session(&row)?)),
            None => Ok(None),
        }
    }

    async fn list_sessions(&self) -> Result<Vec<TrainingSession>> {
        let rows = sqlx::query("SELECT * FROM sessions ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(Self::row_to_session).collect()
    }

    async fn put_membership(&self, member_id: i64, membership: &Membership) -> Result<()> {
        sqlx::query(
            r"
            INSERT OR REPLACE INTO memberships (member_id, datum_uplate, datum_isteka, iznos, status)
            VALUES (?1, ?2, ?3, ?4, ?5)
            ",
        )
        .bind(member_id)
        .bind(membership.datum_uplate.to_string())
        .bind(membership.datum_isteka.to_string())
        .bind(membership.iznos)
        .bind(&membership.status)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn get_membership(&self, member_id: i64) -> Result<Option<Membership>> {
        let row = sqlx::query("SELECT * FROM memberships WHERE member_id = ?1")
            .bind(member_id)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => Ok(Some(Self::row_to_membership(&row)?)),
            None => Ok(None),
        }
    }

    async fn delete_membership(&self, member_id: i64) -> Result<()> {
        sqlx::query("DELETE FROM memberships WHERE member_id = ?1")
            .bind(member_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
