// ABOUTME: In-memory entity store implementation backed by DashMap
// ABOUTME: Used by tests and demos; any conforming backend satisfies the core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sparta Sports Club

//! In-memory entity store implementation
//!
//! Cloning the store shares the underlying maps, so clones observe each
//! other's writes just like connections to the same database would.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use dashmap::DashMap;

use super::EntityStore;
use crate::models::{Member, Membership, TrainingSession};

/// In-memory entity store
#[derive(Clone, Default)]
pub struct MemoryStore {
    members: Arc<DashMap<i64, Member>>,
    sessions: Arc<DashMap<i64, TrainingSession>>,
    memberships: Arc<DashMap<i64, Membership>>,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EntityStore for MemoryStore {
    async fn put_member(&self, member: &Member) -> Result<()> {
        self.members.insert(member.id, member.clone());
        Ok(())
    }

    async fn get_member(&self, id: i64) -> Result<Option<Member>> {
        Ok(self.members.get(&id).map(|m| m.value().clone()))
    }

    async fn list_members(&self) -> Result<Vec<Member>> {
        let mut members: Vec<Member> = self.members.iter().map(|m| m.value().clone()).collect();
        members.sort_by_key(|m| m.id);
        Ok(members)
    }

    async fn delete_member(&self, id: i64) -> Result<()> {
        self.members.remove(&id);
        Ok(())
    }

    async fn email_exists(&self, email: &str) -> Result<bool> {
        Ok(self.members.iter().any(|m| m.value().email == email))
    }

    async fn put_session(&self, session: &TrainingSession) -> Result<()> {
        self.sessions.insert(session.id, session.clone());
        Ok(())
    }

    async fn get_session(&self, id: i64) -> Result<Option<TrainingSession>> {
        Ok(self.sessions.get(&id).map(|s| s.value().clone()))
    }

    async fn list_sessions(&self) -> Result<Vec<TrainingSession>> {
        let mut sessions: Vec<TrainingSession> = self.sessions.iter().map(|s| s.value().clone()).collect();
        sessions.sort_by_key(|s| s.id);
        Ok(sessions)
    }

    async fn put_membership(&self, member_id: i64, membership: &Membership) -> Result<()> {
        self.memberships.insert(member_id, membership.clone());
        Ok(())
    }

    async fn get_membership(&self, member_id: i64) -> Result<Option<Membership>> {
        Ok(self.memberships.get(&member_id).map(|m| m.value().clone()))
    }

    async fn delete_membership(&self, member_id: i64) -> Result<()> {
        self.memberships.remove(&member_id);
        Ok(())
    }
}
