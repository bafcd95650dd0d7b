//! Configuration module with client-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `api` - Backend host, versioned prefix, timeouts and image base URL
//! - `environment` - Environment detection and logging configuration
//! - `session` - Durable session store location

pub mod api;
pub mod environment;
pub mod session;

use serde::{Deserialize, Serialize};

use crate::types::Language;

// Re-export commonly used types
pub use api::ApiConfig;
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use session::SessionConfig;

/// Complete client configuration combining all sub-configurations
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ClientConfig {
    /// Environment configuration
    #[serde(default)]
    pub environment: Environment,

    /// Backend API configuration
    #[serde(default)]
    pub api: ApiConfig,

    /// Session persistence configuration
    #[serde(default)]
    pub session: SessionConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Language used for user-facing messages
    #[serde(default)]
    pub language: Language,
}

impl Default for ClientConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            api: ApiConfig::default(),
            session: SessionConfig::default(),
            logging: LoggingConfig::for_environment(env),
            language: Language::default(),
        }
    }
}

impl ClientConfig {
    /// Create configuration for development environment
    pub fn development() -> Self {
        Self {
            environment: Environment::Development,
            api: ApiConfig::new("http://10.0.2.2:8080")
                .with_image_base_url("http://10.0.2.2:8080/"),
            session: SessionConfig::default(),
            logging: LoggingConfig::for_environment(Environment::Development),
            language: Language::default(),
        }
    }

    /// Create configuration for production environment
    pub fn production() -> Self {
        Self {
            environment: Environment::Production,
            api: ApiConfig::default(),
            session: SessionConfig::default(),
            logging: LoggingConfig::for_environment(Environment::Production),
            language: Language::Indonesian,
        }
    }

    /// Defaults for the environment named by `SHOP_ENV`
    pub fn for_environment(env: Environment) -> Self {
        match env {
            Environment::Development => Self::development(),
            Environment::Production => Self::production(),
            Environment::Staging => {
                let mut config = Self::production();
                config.environment = Environment::Staging;
                config.logging = LoggingConfig::for_environment(Environment::Staging);
                config
            }
        }
    }

    /// Load defaults for the environment detected from the process env
    pub fn from_env() -> Self {
        Self::for_environment(Environment::from_env())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_staging_uses_production_api_with_staging_logging() {
        let config = ClientConfig::for_environment(Environment::Staging);
        assert_eq!(config.environment, Environment::Staging);
        assert_eq!(config.api, ApiConfig::default());
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_empty_document_deserializes_to_defaults() {
        let config: ClientConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.language, Language::English);
        assert_eq!(config.api.api_prefix, "/api/v1");
    }
}
