// ABOUTME: Domain service layer for the Sparta membership system
// ABOUTME: Enrollment and reporting engines on top of the entity store contract

use anyhow::Result;

use crate::store::{factory::Database, EntityStore};

/// Capacity- and eligibility-checked member-to-session assignment
pub mod enrollment;

/// Read-only occupancy and activity aggregates
pub mod reports;

pub use enrollment::EnrollmentEngine;
pub use reports::{ReportingEngine, SessionOccupancy};

/// Count members currently assigned to a session
///
/// Always recomputed from persisted state via a full member scan, so it
/// reflects the latest committed assignments at the instant of the call.
pub(crate) async fn enrolled_count(store: &Database, session_id: i64) -> Result<u64> {
    let members = store.list_members().await?;
    Ok(members
        .iter()
        .filter(|m| m.termin == Some(session_id))
        .count() as u64)
}
