// ABOUTME: Route handlers for the training session REST API
// ABOUTME: Session creation with capacity bounds and schedule listing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sparta Sports Club

//! Training session routes
//!
//! Sessions are created and listed; there is no delete endpoint, so a
//! member's assignment can never point at a vanished session.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tracing::info;

use crate::errors::{AppError, AppResult};
use crate::models::{NewSession, TrainingSession};
use crate::routes::ServerResources;
use crate::store::EntityStore;

/// Session routes handler
pub struct SessionRoutes;

impl SessionRoutes {
    /// Create all session routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/sessions", post(Self::handle_create))
            .route("/sessions", get(Self::handle_list))
            .with_state(resources)
    }

    /// Handle POST /sessions - Create a new training session
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        Json(body): Json<NewSession>,
    ) -> AppResult<Response> {
        let store = &resources.database;

        if store.get_session(body.id).await?.is_some() {
            return Err(AppError::conflict(format!(
                "session {} already exists",
                body.id
            )));
        }

        let session = body.validate()?;
        store.put_session(&session).await?;

        info!(session_id = session.id, "training session created");
        Ok((StatusCode::CREATED, Json(session)).into_response())
    }

    /// Handle GET /sessions - List the full schedule
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
    ) -> AppResult<Json<Vec<TrainingSession>>> {
        Ok(Json(resources.database.list_sessions().await?))
    }
}
