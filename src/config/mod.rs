// ABOUTME: Configuration management for the Sparta membership server
// ABOUTME: Environment-based configuration with typed accessors

/// Environment-based configuration management
pub mod environment;

pub use environment::ServerConfig;
