// ABOUTME: API key authentication middleware for HTTP request validation
// ABOUTME: Checks the X-API-Key header against the configured static key
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sparta Sports Club

//! Static API key authentication middleware

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use tracing::warn;

use crate::config::ServerConfig;
use crate::errors::AppError;

/// Header carrying the client's API key
pub const API_KEY_HEADER: &str = "x-api-key";

/// Require a valid `X-API-Key` header on every request
///
/// When no key is configured the check is disabled and all requests pass.
/// The welcome and health routes stay open regardless.
///
/// # Errors
///
/// - `AuthRequired` when the header is missing
/// - `AuthInvalid` when the header does not match the configured key
pub async fn require_api_key(
    State(config): State<Arc<ServerConfig>>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Some(expected) = config.api_key.as_deref() else {
        return Ok(next.run(req).await);
    };

    let path = req.uri().path();
    if path == "/" || path == "/health" {
        return Ok(next.run(req).await);
    }

    let provided = req
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|h| h.to_str().ok());

    match provided {
        None => {
            warn!(%path, "request rejected, missing API key");
            Err(AppError::auth_required())
        }
        Some(key) if key != expected => {
            warn!(%path, "request rejected, invalid API key");
            Err(AppError::auth_invalid("API key does not match"))
        }
        Some(_) => Ok(next.run(req).await),
    }
}
