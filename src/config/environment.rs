// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables and runtime configuration parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sparta Sports Club

//! Environment-based configuration management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;

/// Default HTTP port when `HTTP_PORT` is unset
const DEFAULT_HTTP_PORT: u16 = 8080;

/// Default store URL when `DATABASE_URL` is unset
const DEFAULT_DATABASE_URL: &str = "sqlite:data/sparta.db";

/// Strongly typed log level configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Environment type for deployment-mode decisions
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

/// Server configuration loaded from the environment
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP port the server listens on
    pub http_port: u16,
    /// Entity store connection string (`sqlite:...` or `memory:`)
    pub database_url: String,
    /// Static API key protecting the data routes; `None` disables the check
    pub api_key: Option<String>,
    /// Deployment environment
    pub environment: Environment,
    /// Base log level
    pub log_level: LogLevel,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if `HTTP_PORT` is set but not a valid port number.
    pub fn from_env() -> Result<Self> {
        let http_port = match env::var("HTTP_PORT") {
            Ok(port) => port
                .parse::<u16>()
                .with_context(|| format!("HTTP_PORT must be a valid port number, got '{port}'"))?,
            Err(_) => DEFAULT_HTTP_PORT,
        };

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        let api_key = env::var("API_KEY").ok().filter(|k| !k.is_empty());

        let environment = Environment::from_str_or_default(
            &env::var("ENVIRONMENT").unwrap_or_default(),
        );

        let log_level =
            LogLevel::from_str_or_default(&env::var("LOG_LEVEL").unwrap_or_default());

        Ok(Self {
            http_port,
            database_url,
            api_key,
            environment,
            log_level,
        })
    }

    /// One-line configuration summary for startup logging
    ///
    /// Never includes the API key itself.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "port={} store={} api_key={} env={:?} log={}",
            self.http_port,
            self.database_url,
            if self.api_key.is_some() {
                "configured"
            } else {
                "disabled"
            },
            self.environment,
            self.log_level
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str_or_default("DEBUG"), LogLevel::Debug);
        assert_eq!(LogLevel::from_str_or_default("bogus"), LogLevel::Info);
    }

    #[test]
    fn test_environment_parsing() {
        assert!(Environment::from_str_or_default("prod").is_production());
        assert_eq!(
            Environment::from_str_or_default(""),
            Environment::Development
        );
    }

    #[test]
    fn test_summary_hides_api_key() {
        let config = ServerConfig {
            http_port: 8080,
            database_url: "memory:".into(),
            api_key: Some("sparta-secret-key-2024".into()),
            environment: Environment::Development,
            log_level: LogLevel::Info,
        };
        assert!(!config.summary().contains("sparta-secret-key-2024"));
        assert!(config.summary().contains("configured"));
    }
}
