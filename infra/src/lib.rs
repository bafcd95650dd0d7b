//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the ShopMobile client.
//! It provides the concrete collaborators the domain layer is written
//! against and wires them together.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **HTTP**: reqwest implementation of the `Transport` boundary
//! - **Session**: JSON file implementation of the `SessionStore` boundary
//! - **Config**: layered configuration loading (defaults, TOML file, env)
//! - **Telemetry**: tracing subscriber setup
//! - **Client**: the `ShopClient` container holding every repository

// Re-export core types for convenience
pub use sm_core::errors::*;

/// Client container wiring transport, session store and repositories
pub mod client;

/// Configuration loading
pub mod config;

/// HTTP transport - reqwest implementation
pub mod http;

/// Durable session storage
pub mod session;

/// Tracing subscriber initialization
pub mod telemetry;

pub use client::ShopClient;
pub use config::load_config;
pub use http::ReqwestTransport;
pub use session::FileSessionStore;
pub use telemetry::init_tracing;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// HTTP client construction error
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Session file I/O error
    #[error("Session storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Session encoding error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Logging setup error
    #[error("Telemetry error: {0}")]
    Telemetry(String),
}

impl From<::config::ConfigError> for InfrastructureError {
    fn from(err: ::config::ConfigError) -> Self {
        InfrastructureError::Config(err.to_string())
    }
}

impl From<InfrastructureError> for SessionStoreError {
    fn from(err: InfrastructureError) -> Self {
        match err {
            InfrastructureError::Serialization(err) => SessionStoreError::Serialization(err.to_string()),
            other => SessionStoreError::Storage(other.to_string()),
        }
    }
}
