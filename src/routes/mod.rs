// ABOUTME: HTTP route handlers for the Sparta membership REST API
// ABOUTME: Assembles per-entity routers and shared server resources into one Router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sparta Sports Club

//! REST API routes
//!
//! Each entity gets its own routes struct with a `routes(resources)`
//! constructor; this module merges them and applies the shared middleware
//! stack (request tracing, CORS, API key auth).

use std::sync::Arc;

use axum::{middleware, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::ServerConfig;
use crate::services::{EnrollmentEngine, ReportingEngine};
use crate::store::factory::Database;

/// Member CRUD endpoints
pub mod members;

/// Training session endpoints
pub mod sessions;

/// Session assignment endpoints
pub mod enrollment;

/// Membership payment record endpoints
pub mod memberships;

/// Occupancy and activity report endpoints
pub mod reports;

/// Welcome and health endpoints
pub mod health;

/// Shared resources threaded through every route handler
pub struct ServerResources {
    /// Entity store behind the backend factory
    pub database: Database,
    /// Capacity- and group-checked assignment engine
    pub enrollment: EnrollmentEngine,
    /// Read-only report engine
    pub reporting: ReportingEngine,
    /// Server configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Build resources around one store; both engines share it
    #[must_use]
    pub fn new(database: Database, config: Arc<ServerConfig>) -> Self {
        Self {
            enrollment: EnrollmentEngine::new(database.clone()),
            reporting: ReportingEngine::new(database.clone()),
            database,
            config,
        }
    }
}

/// Assemble the full API router
#[must_use]
pub fn router(resources: Arc<ServerResources>) -> Router {
    let config = resources.config.clone();

    Router::new()
        .merge(health::HealthRoutes::routes())
        .merge(members::MemberRoutes::routes(resources.clone()))
        .merge(sessions::SessionRoutes::routes(resources.clone()))
        .merge(enrollment::EnrollmentRoutes::routes(resources.clone()))
        .merge(memberships::MembershipRoutes::routes(resources.clone()))
        .merge(reports::ReportRoutes::routes(resources))
        .layer(middleware::from_fn_with_state(
            config,
            crate::middleware::require_api_key,
        ))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
