// ABOUTME: Main server binary for the Sparta membership REST API
// ABOUTME: Loads configuration, connects the entity store, and serves the router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sparta Sports Club

//! # Sparta Membership API Server Binary
//!
//! Starts the REST API for member registration, training session scheduling,
//! enrollment, membership fees, and reports.

use anyhow::Result;
use clap::Parser;
use sparta_server::{
    config::environment::ServerConfig,
    logging,
    routes::{self, ServerResources},
    store::factory::Database,
};
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "sparta-server")]
#[command(about = "Sparta Sports Club - membership and training session API")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Handle container environments where clap may not work properly
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Argument parsing failed: {e}");
            eprintln!("Using default configuration");
            Args { http_port: None }
        }
    };

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    logging::init_from_env()?;

    info!("Starting Sparta membership API");
    info!("{}", config.summary());

    let database = Database::connect(&config.database_url).await?;
    info!("Entity store initialized: {}", database.backend_info());

    let config = Arc::new(config);
    let resources = Arc::new(ServerResources::new(database, config.clone()));
    let app = routes::router(resources);

    display_available_endpoints(config.http_port);

    let addr = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {addr}");

    axum::serve(listener, app).await?;

    Ok(())
}

/// Display all available API endpoints with their port
#[allow(clippy::cognitive_complexity)]
fn display_available_endpoints(port: u16) {
    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

    info!("=== Available API Endpoints ===");
    info!("Members:");
    info!("   Register Member:   POST http://{host}:{port}/members");
    info!("   List Members:      GET  http://{host}:{port}/members");
    info!("   Get Member:        GET  http://{host}:{port}/members/{{id}}");
    info!("   Update Member:     PATCH http://{host}:{port}/members/{{id}}");
    info!("   Delete Member:     DELETE http://{host}:{port}/members/{{id}}");
    info!("Training Sessions:");
    info!("   Create Session:    POST http://{host}:{port}/sessions");
    info!("   List Sessions:     GET  http://{host}:{port}/sessions");
    info!("Enrollment:");
    info!("   Assign Session:    PUT  http://{host}:{port}/members/{{id}}/assign-session/{{session_id}}");
    info!("   Unassign Session:  DELETE http://{host}:{port}/members/{{id}}/assign-session");
    info!("Memberships:");
    info!("   Put Membership:    PUT  http://{host}:{port}/members/{{id}}/membership");
    info!("   Get Membership:    GET  http://{host}:{port}/members/{{id}}/membership");
    info!("   Delete Membership: DELETE http://{host}:{port}/members/{{id}}/membership");
    info!("Reports:");
    info!("   Occupancy:         GET  http://{host}:{port}/reports/occupancy");
    info!("   Active per Group:  GET  http://{host}:{port}/reports/active-per-group");
    info!("Monitoring:");
    info!("   Health Check:      GET  http://{host}:{port}/health");
    info!("=== End of Endpoint List ===");
}
