// ABOUTME: Route handlers for occupancy and activity reports
// ABOUTME: Read-only endpoints backed by the reporting engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sparta Sports Club

//! Report routes

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::errors::AppResult;
use crate::models::Group;
use crate::routes::ServerResources;
use crate::services::SessionOccupancy;

/// Report routes handler
pub struct ReportRoutes;

impl ReportRoutes {
    /// Create all report routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/reports/occupancy", get(Self::handle_occupancy))
            .route(
                "/reports/active-per-group",
                get(Self::handle_active_per_group),
            )
            .with_state(resources)
    }

    /// Handle GET /reports/occupancy - Per-session enrollment counts
    async fn handle_occupancy(
        State(resources): State<Arc<ServerResources>>,
    ) -> AppResult<Json<Vec<SessionOccupancy>>> {
        Ok(Json(resources.reporting.occupancy().await?))
    }

    /// Handle GET /reports/active-per-group - Active member counts per group
    async fn handle_active_per_group(
        State(resources): State<Arc<ServerResources>>,
    ) -> AppResult<Json<BTreeMap<Group, u64>>> {
        Ok(Json(resources.reporting.active_per_group().await?))
    }
}
