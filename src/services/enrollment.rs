// ABOUTME: Enrollment engine mediating member-to-session assignment
// ABOUTME: Enforces group eligibility and session capacity; assigns are serialized
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sparta Sports Club

//! Enrollment engine
//!
//! Assignment is a check-then-act sequence over the entity store: read the
//! current enrollment count, decide, then write. The engine serializes all
//! `assign` calls through one mutex, so the capacity invariant also holds
//! when callers race; clones of the engine share the same gate.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::info;

use crate::errors::{AppError, AppResult};
use crate::models::Member;
use crate::store::{factory::Database, EntityStore};

use super::enrolled_count;

/// Enrollment engine over a shared entity store
#[derive(Clone)]
pub struct EnrollmentEngine {
    store: Database,
    assign_gate: Arc<Mutex<()>>,
}

impl EnrollmentEngine {
    /// Create an engine over the given store
    #[must_use]
    pub fn new(store: Database) -> Self {
        Self {
            store,
            assign_gate: Arc::new(Mutex::new(())),
        }
    }

    /// Assign a member to a training session
    ///
    /// A member already assigned elsewhere is silently re-assigned; the old
    /// assignment is overwritten, not rejected.
    ///
    /// # Errors
    ///
    /// - `ResourceNotFound` when the member or session does not exist
    /// - `GroupMismatch` when the member's group differs from the session's
    /// - `CapacityExceeded` when the session is full at call time
    /// - `DatabaseError` when the store collaborator fails
    pub async fn assign(&self, member_id: i64, session_id: i64) -> AppResult<Member> {
        // Serializes the count-check and the write against concurrent assigns
        let _gate = self.assign_gate.lock().await;

        let mut member = self
            .store
            .get_member(member_id)
            .await?
            .ok_or_else(|| AppError::not_found("member", member_id))?;

        let session = self
            .store
            .get_session(session_id)
            .await?
            .ok_or_else(|| AppError::not_found("session", session_id))?;

        if member.grupa != session.grupa {
            return Err(AppError::group_mismatch(
                member.grupa.as_str(),
                session.grupa.as_str(),
            ));
        }

        let enrolled = enrolled_count(&self.store, session_id).await?;
        if enrolled >= u64::from(session.max_clanova) {
            return Err(AppError::capacity_exceeded(session_id, session.max_clanova));
        }

        member.termin = Some(session_id);
        self.store.put_member(&member).await?;

        info!(
            member_id,
            session_id, enrolled = enrolled + 1, "member assigned to session"
        );
        Ok(member)
    }

    /// Clear a member's session assignment
    ///
    /// Idempotent: unassigning an already-unassigned member succeeds silently.
    ///
    /// # Errors
    ///
    /// - `ResourceNotFound` when the member does not exist
    /// - `DatabaseError` when the store collaborator fails
    pub async fn unassign(&self, member_id: i64) -> AppResult<Member> {
        let mut member = self
            .store
            .get_member(member_id)
            .await?
            .ok_or_else(|| AppError::not_found("member", member_id))?;

        member.termin = None;
        self.store.put_member(&member).await?;

        info!(member_id, "member unassigned from session");
        Ok(member)
    }
}
