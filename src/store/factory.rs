// ABOUTME: Store factory and backend abstraction for multi-backend support
// ABOUTME: Provides unified interface for SQLite and in-memory stores with runtime selection
//! Store factory for creating entity store backends
//!
//! This module provides automatic backend detection and creation based on
//! connection strings.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use tracing::{debug, info};

use super::memory::MemoryStore;
use super::sqlite::SqliteStore;
use super::EntityStore;
use crate::models::{Member, Membership, TrainingSession};

/// Supported store backends
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreType {
    Sqlite,
    Memory,
}

/// Store instance wrapper that delegates to the appropriate implementation
#[derive(Clone)]
pub enum Database {
    Sqlite(SqliteStore),
    Memory(MemoryStore),
}

impl Database {
    /// Get a descriptive string for the current store backend
    #[must_use]
    pub const fn backend_info(&self) -> &'static str {
        match self {
            Self::Sqlite(_) => "SQLite (embedded file database)",
            Self::Memory(_) => "In-memory (tests and demos)",
        }
    }

    /// Create a new store instance based on the connection string
    ///
    /// # Errors
    ///
    /// Returns an error if the URL format is unsupported or the backend
    /// fails to initialize.
    pub async fn connect(database_url: &str) -> Result<Self> {
        debug!("Detecting store backend from URL: {}", database_url);
        let store_type = detect_store_type(database_url)?;
        info!("Detected store backend: {:?}", store_type);

        match store_type {
            StoreType::Sqlite => {
                let store = SqliteStore::new(database_url).await?;
                info!("SQLite store initialized successfully");
                Ok(Self::Sqlite(store))
            }
            StoreType::Memory => Ok(Self::Memory(MemoryStore::new())),
        }
    }

    /// Create an in-memory store instance directly
    #[must_use]
    pub fn in_memory() -> Self {
        Self::Memory(MemoryStore::new())
    }
}

/// Automatically detect the store backend from a connection string
///
/// # Errors
///
/// Returns an error if the URL does not start with `sqlite:` or `memory:`.
pub fn detect_store_type(database_url: &str) -> Result<StoreType> {
    if database_url.starts_with("sqlite:") {
        Ok(StoreType::Sqlite)
    } else if database_url.starts_with("memory:") {
        Ok(StoreType::Memory)
    } else {
        Err(anyhow!(
            "Unsupported store URL format: {}. \
             Supported formats: sqlite:path/to/db.sqlite, memory:",
            database_url
        ))
    }
}

// Implement EntityStore for the enum by delegating to the appropriate backend
#[async_trait]
impl EntityStore for Database {
    /// Create or replace a member record
    ///
    /// # Errors
    ///
    /// Returns an error if the backend write fails.
    async fn put_member(&self, member: &Member) -> Result<()> {
        match self {
            Self::Sqlite(store) => store.put_member(member).await,
            Self::Memory(store) => store.put_member(member).await,
        }
    }

    /// Get a member by id
    ///
    /// # Errors
    ///
    /// Returns an error if the backend read fails.
    async fn get_member(&self, id: i64) -> Result<Option<Member>> {
        match self {
            Self::Sqlite(store) => store.get_member(id).await,
            Self::Memory(store) => store.get_member(id).await,
        }
    }

    async fn list_members(&self) -> Result<Vec<Member>> {
        match self {
            Self::Sqlite(store) => store.list_members().await,
            Self::Memory(store) => store.list_members().await,
        }
    }

    async fn delete_member(&self, id: i64) -> Result<()> {
        match self {
            Self::Sqlite(store) => store.delete_member(id).await,
            Self::Memory(store) => store.delete_member(id).await,
        }
    }

    async fn email_exists(&self, email: &str) -> Result<bool> {
        match self {
            Self::Sqlite(store) => store.email_exists(email).await,
            Self::Memory(store) => store.email_exists(email).await,
        }
    }

    async fn put_session(&self, session: &TrainingSession) -> Result<()> {
        match self {
            Self::Sqlite(store) => store.put_session(session).await,
            Self::Memory(store) => store.put_session(session).await,
        }
    }

    async fn get_session(&self, id: i64) -> Result<Option<TrainingSession>> {
        match self {
            Self::Sqlite(store) => store.get_session(id).await,
            Self::Memory(store) => store.get_session(id).await,
        }
    }

    async fn list_sessions(&self) -> Result<Vec<TrainingSession>> {
        match self {
            Self::Sqlite(store) => store.list_sessions().await,
            Self::Memory(store) => store.list_sessions().await,
        }
    }

    async fn put_membership(&self, member_id: i64, membership: &Membership) -> Result<()> {
        match self {
            Self::Sqlite(store) => store.put_membership(member_id, membership).await,
            Self::Memory(store) => store.put_membership(member_id, membership).await,
        }
    }

    async fn get_membership(&self, member_id: i64) -> Result<Option<Membership>> {
        match self {
            Self::Sqlite(store) => store.get_membership(member_id).await,
            Self::Memory(store) => store.get_membership(member_id).await,
        }
    }

    async fn delete_membership(&self, member_id: i64) -> Result<()> {
        match self {
            Self::Sqlite(store) => store.delete_membership(member_id).await,
            Self::Memory(store) => store.delete_membership(member_id).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_store_type() {
        assert_eq!(
            detect_store_type("sqlite:data/sparta.db").unwrap(),
            StoreType::Sqlite
        );
        assert_eq!(detect_store_type("memory:").unwrap(), StoreType::Memory);
        assert!(detect_store_type("postgresql://localhost/club").is_err());
    }
}
