// ABOUTME: Main library entry point for the Sparta membership API
// ABOUTME: Provides REST endpoints for members, training sessions, and membership fees
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sparta Sports Club

#![deny(unsafe_code)]

//! # Sparta Membership Server
//!
//! A REST API for the Sparta sports club: member registration, recurring
//! training sessions, membership (fee) records, and occupancy reports.
//!
//! ## Architecture
//!
//! The server follows a modular architecture:
//! - **Models**: domain values and pure validation (members, sessions, memberships)
//! - **Store**: entity store abstraction with SQLite and in-memory backends
//! - **Services**: enrollment and reporting engines on top of the store
//! - **Routes**: thin axum handlers mapping HTTP to service calls
//! - **Config**: environment-based configuration management
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use sparta_server::config::environment::ServerConfig;
//! use sparta_server::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("Sparta server configured with port: HTTP={}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Environment-based configuration management
pub mod config;

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Production logging and structured output
pub mod logging;

/// HTTP middleware for API key protection
pub mod middleware;

/// Domain models and pure validation for members, sessions, and memberships
pub mod models;

/// HTTP routes for the REST surface
pub mod routes;

/// Enrollment and reporting engines
pub mod services;

/// Entity store abstraction layer with plugin support
pub mod store;
