// ABOUTME: Route handlers for membership (fee) records
// ABOUTME: Put, get, and delete of the single payment record per member
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sparta Sports Club

//! Membership routes
//!
//! Each member carries at most one membership record. PUT replaces it
//! wholesale, so renewing a fee is the same call as recording the first one.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{delete, get, put},
    Json, Router,
};
use tracing::info;

use crate::errors::{AppError, AppResult};
use crate::models::{Membership, NewMembership};
use crate::routes::ServerResources;
use crate::store::EntityStore;

/// Membership routes handler
pub struct MembershipRoutes;

impl MembershipRoutes {
    /// Create all membership routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/members/:id/membership", put(Self::handle_put))
            .route("/members/:id/membership", get(Self::handle_get))
            .route("/members/:id/membership", delete(Self::handle_delete))
            .with_state(resources)
    }

    /// Handle PUT /members/:id/membership - Create or replace the record
    async fn handle_put(
        State(resources): State<Arc<ServerResources>>,
        Path(member_id): Path<i64>,
        Json(body): Json<NewMembership>,
    ) -> AppResult<Json<Membership>> {
        let store = &resources.database;

        if store.get_member(member_id).await?.is_none() {
            return Err(AppError::not_found("member", member_id));
        }

        let membership = body.validate()?;
        store.put_membership(member_id, &membership).await?;

        info!(member_id, "membership record stored");
        Ok(Json(membership))
    }

    /// Handle GET /members/:id/membership - Fetch the record
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        Path(member_id): Path<i64>,
    ) -> AppResult<Json<Membership>> {
        let membership = resources
            .database
            .get_membership(member_id)
            .await?
            .ok_or_else(|| AppError::not_found("membership", member_id))?;

        Ok(Json(membership))
    }

    /// Handle DELETE /members/:id/membership - Remove the record
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        Path(member_id): Path<i64>,
    ) -> AppResult<Json<serde_json::Value>> {
        let store = &resources.database;

        if store.get_membership(member_id).await?.is_none() {
            return Err(AppError::not_found("membership", member_id));
        }

        store.delete_membership(member_id).await?;

        info!(member_id, "membership record deleted");
        Ok(Json(serde_json::json!({
            "message": format!("Članarina člana {member_id} je obrisana.")
        })))
    }
}
