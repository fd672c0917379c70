// ABOUTME: Route handlers for member-to-session assignment
// ABOUTME: Thin HTTP layer over the enrollment engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sparta Sports Club

//! Enrollment routes
//!
//! All group and capacity rules live in the enrollment engine; these
//! handlers only translate between HTTP and engine calls.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{delete, put},
    Json, Router,
};

use crate::errors::AppResult;
use crate::models::Member;
use crate::routes::ServerResources;

/// Enrollment routes handler
pub struct EnrollmentRoutes;

impl EnrollmentRoutes {
    /// Create all enrollment routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/members/:id/assign-session/:session_id",
                put(Self::handle_assign),
            )
            .route("/members/:id/assign-session", delete(Self::handle_unassign))
            .with_state(resources)
    }

    /// Handle PUT /members/:id/assign-session/:session_id
    async fn handle_assign(
        State(resources): State<Arc<ServerResources>>,
        Path((member_id, session_id)): Path<(i64, i64)>,
    ) -> AppResult<Json<Member>> {
        let member = resources.enrollment.assign(member_id, session_id).await?;
        Ok(Json(member))
    }

    /// Handle DELETE /members/:id/assign-session
    async fn handle_unassign(
        State(resources): State<Arc<ServerResources>>,
        Path(member_id): Path<i64>,
    ) -> AppResult<Json<Member>> {
        let member = resources.enrollment.unassign(member_id).await?;
        Ok(Json(member))
    }
}
