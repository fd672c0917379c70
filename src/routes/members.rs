// ABOUTME: Route handlers for the member REST API
// ABOUTME: Registration, listing, retrieval with embedded membership, patch, and cascading delete
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sparta Sports Club

//! Member routes
//!
//! Registration validates the wire payload into a typed [`Member`] before
//! anything is written, so invalid groups, statuses, and phone numbers are
//! rejected with a 400 rather than stored.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, patch, post},
    Json, Router,
};
use tracing::info;

use crate::errors::{AppError, AppResult};
use crate::models::{Member, MemberPatch, NewMember};
use crate::routes::ServerResources;
use crate::store::EntityStore;

/// Member routes handler
pub struct MemberRoutes;

impl MemberRoutes {
    /// Create all member routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/members", post(Self::handle_create))
            .route("/members", get(Self::handle_list))
            .route("/members/:id", get(Self::handle_get))
            .route("/members/:id", patch(Self::handle_update))
            .route("/members/:id", delete(Self::handle_delete))
            .with_state(resources)
    }

    /// Handle POST /members - Register a new member
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        Json(body): Json<NewMember>,
    ) -> AppResult<Response> {
        let store = &resources.database;

        if store.get_member(body.id).await?.is_some() {
            return Err(AppError::conflict(format!(
                "member {} already exists",
                body.id
            )));
        }
        if store.email_exists(&body.email).await? {
            return Err(AppError::conflict(format!(
                "email '{}' is already registered",
                body.email
            )));
        }

        let member = body.validate()?;
        store.put_member(&member).await?;

        info!(member_id = member.id, "member registered");
        Ok((StatusCode::CREATED, Json(member)).into_response())
    }

    /// Handle GET /members - List all members
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
    ) -> AppResult<Json<Vec<Member>>> {
        Ok(Json(resources.database.list_members().await?))
    }

    /// Handle GET /members/:id - Get one member, membership embedded when present
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<i64>,
    ) -> AppResult<Json<serde_json::Value>> {
        let store = &resources.database;

        let member = store
            .get_member(id)
            .await?
            .ok_or_else(|| AppError::not_found("member", id))?;

        let mut body = serde_json::to_value(&member)
            .map_err(|e| AppError::internal(e.to_string()))?;
        if let Some(membership) = store.get_membership(id).await? {
            body["clanarina"] = serde_json::to_value(&membership)
                .map_err(|e| AppError::internal(e.to_string()))?;
        }

        Ok(Json(body))
    }

    /// Handle PATCH /members/:id - Partially update a member
    async fn handle_update(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<i64>,
        Json(body): Json<MemberPatch>,
    ) -> AppResult<Json<Member>> {
        let store = &resources.database;

        let patch = body.validate()?;
        let mut member = store
            .get_member(id)
            .await?
            .ok_or_else(|| AppError::not_found("member", id))?;

        // Uniqueness only matters when the email actually changes
        if let Some(new_email) = patch.email.as_deref() {
            if new_email != member.email && store.email_exists(new_email).await? {
                return Err(AppError::conflict(format!(
                    "email '{new_email}' is already registered"
                )));
            }
        }

        patch.apply(&mut member);
        store.put_member(&member).await?;

        info!(member_id = id, "member updated");
        Ok(Json(member))
    }

    /// Handle DELETE /members/:id - Delete a member and their membership record
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<i64>,
    ) -> AppResult<Json<serde_json::Value>> {
        let store = &resources.database;

        if store.get_member(id).await?.is_none() {
            return Err(AppError::not_found("member", id));
        }

        // Membership records never outlive their member
        store.delete_membership(id).await?;
        store.delete_member(id).await?;

        info!(member_id = id, "member deleted");
        Ok(Json(serde_json::json!({
            "message": format!("Član {id} je obrisan.")
        })))
    }
}
