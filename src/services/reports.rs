// ABOUTME: Reporting engine deriving read-only aggregates from entity state
// ABOUTME: Session occupancy and active-member-per-group reports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sparta Sports Club

//! Reporting engine
//!
//! Both reports are pure reads over the entity store contract; nothing is
//! mutated and nothing is cached between calls.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveTime;
use serde::Serialize;

use crate::errors::AppResult;
use crate::models::{Group, TrainingSession, Weekday};
use crate::store::{factory::Database, EntityStore};

/// Occupancy row for one training session
#[derive(Debug, Clone, Serialize)]
pub struct SessionOccupancy {
    /// Session identifier
    pub session_id: i64,
    /// Skill group
    pub grupa: Group,
    /// Training day
    pub dan: Weekday,
    /// Time of day
    pub vrijeme: NaiveTime,
    /// Members currently assigned
    pub upisani: u64,
    /// Maximum capacity
    pub max: u32,
    /// Remaining free places, floored at 0
    pub preostalo: u64,
}

impl SessionOccupancy {
    fn for_session(session: &TrainingSession, upisani: u64) -> Self {
        Self {
            session_id: session.id,
            grupa: session.grupa,
            dan: session.dan,
            vrijeme: session.vrijeme,
            upisani,
            max: session.max_clanova,
            preostalo: u64::from(session.max_clanova).saturating_sub(upisani),
        }
    }
}

/// Reporting engine over a shared entity store
#[derive(Clone)]
pub struct ReportingEngine {
    store: Database,
}

impl ReportingEngine {
    /// Create an engine over the given store
    #[must_use]
    pub const fn new(store: Database) -> Self {
        Self { store }
    }

    /// Occupancy per session, ordered by session id ascending
    ///
    /// Enrollment counts are recomputed from one member scan at call time.
    ///
    /// # Errors
    ///
    /// Returns a `DatabaseError` when a store scan fails.
    pub async fn occupancy(&self) -> AppResult<Vec<SessionOccupancy>> {
        let mut sessions = self.store.list_sessions().await?;
        sessions.sort_by_key(|s| s.id);

        let members = self.store.list_members().await?;
        let mut counts: HashMap<i64, u64> = HashMap::new();
        for member in &members {
            if let Some(session_id) = member.termin {
                *counts.entry(session_id).or_default() += 1;
            }
        }

        Ok(sessions
            .iter()
            .map(|session| {
                SessionOccupancy::for_session(
                    session,
                    counts.get(&session.id).copied().unwrap_or(0),
                )
            })
            .collect())
    }

    /// Active member count per group
    ///
    /// Every allowed group appears in the result, zero counts included.
    ///
    /// # Errors
    ///
    /// Returns a `DatabaseError` when the member scan fails.
    pub async fn active_per_group(&self) -> AppResult<BTreeMap<Group, u64>> {
        let mut counts: BTreeMap<Group, u64> = Group::ALL.iter().map(|g| (*g, 0)).collect();

        for member in self.store.list_members().await? {
            if member.status.is_active() {
                *counts.entry(member.grupa).or_default() += 1;
            }
        }

        Ok(counts)
    }
}
