// ABOUTME: Welcome and health check route handlers for service monitoring
// ABOUTME: Provides the root welcome message and a liveness endpoint
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sparta Sports Club

//! Welcome and health check routes
//!
//! Both endpoints stay outside the API key check so load balancers and
//! uptime monitors can reach them unauthenticated.

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create the welcome and health routes
    pub fn routes() -> axum::Router {
        use axum::{routing::get, Json, Router};

        async fn welcome_handler() -> Json<serde_json::Value> {
            Json(serde_json::json!({
                "message": "Dobrodošli u API za evidenciju članarina!"
            }))
        }

        async fn health_handler() -> Json<serde_json::Value> {
            Json(serde_json::json!({
                "status": "healthy",
                "timestamp": chrono::Utc::now().to_rfc3339()
            }))
        }

        Router::new()
            .route("/", get(welcome_handler))
            .route("/health", get(health_handler))
    }
}
