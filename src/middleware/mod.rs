// ABOUTME: HTTP middleware for the Sparta membership server
// ABOUTME: Static API key authentication on the data routes

/// Static API key authentication
pub mod api_key;

pub use api_key::require_api_key;
