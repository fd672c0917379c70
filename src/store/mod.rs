// ABOUTME: Entity store abstraction layer for the Sparta membership system
// ABOUTME: Plugin architecture with SQLite and in-memory backends

use anyhow::Result;
use async_trait::async_trait;

use crate::models::{Member, Membership, TrainingSession};

pub mod factory;
pub mod memory;
pub mod sqlite;

/// Core entity store abstraction trait
///
/// All store implementations must implement this trait to provide a
/// consistent interface for the domain layer. Records are independently
/// keyed; there are no multi-entity transactions.
#[async_trait]
pub trait EntityStore: Send + Sync + Clone {
    // ================================
    // Members
    // ================================

    /// Create or replace a member record
    async fn put_member(&self, member: &Member) -> Result<()>;

    /// Get member by id
    async fn get_member(&self, id: i64) -> Result<Option<Member>>;

    /// Full scan of all members
    async fn list_members(&self) -> Result<Vec<Member>>;

    /// Delete member by id; absent ids delete nothing
    async fn delete_member(&self, id: i64) -> Result<()>;

    /// Check whether any member already uses this email
    async fn email_exists(&self, email: &str) -> Result<bool>;

    // ================================
    // Training sessions
    // ================================

    /// Create or replace a session record
    async fn put_session(&self, session: &TrainingSession) -> Result<()>;

    /// Get session by id
    async fn get_session(&self, id: i64) -> Result<Option<TrainingSession>>;

    /// Full scan of all sessions
    async fn list_sessions(&self) -> Result<Vec<TrainingSession>>;

    // ================================
    // Memberships (1:1 per member)
    // ================================

    /// Create or replace the membership record for a member
    async fn put_membership(&self, member_id: i64, membership: &Membership) -> Result<()>;

    /// Get the membership record for a member
    async fn get_membership(&self, member_id: i64) -> Result<Option<Membership>>;

    /// Delete the membership record for a member; absent records delete nothing
    async fn delete_membership(&self, member_id: i64) -> Result<()>;
}
