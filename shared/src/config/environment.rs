//! Deployment environment and the logging defaults that follow from it

use serde::{Deserialize, Serialize};
use std::env;

/// Variables consulted, in order, to detect the environment
const ENVIRONMENT_VARS: [&str; 3] = ["SHOP_ENV", "ENVIRONMENT", "RUST_ENV"];

/// Backend deployment the client talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local backend, verbose logs
    #[default]
    Development,
    /// Pre-release backend
    Staging,
    /// Live store
    Production,
}

impl Environment {
    /// Detect from `SHOP_ENV`, `ENVIRONMENT` or `RUST_ENV`.
    ///
    /// Unset or unrecognized values mean development.
    pub fn from_env() -> Self {
        ENVIRONMENT_VARS
            .iter()
            .find_map(|name| env::var(name).ok())
            .and_then(|value| value.parse().ok())
            .unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }

    /// File picked up from the working directory when no config path is given
    pub fn config_file(&self) -> &'static str {
        match self {
            Environment::Development => "shop.development.toml",
            Environment::Staging => "shop.staging.toml",
            Environment::Production => "shop.production.toml",
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "staging" | "stage" | "test" => Ok(Environment::Staging),
            "production" | "prod" => Ok(Environment::Production),
            other => Err(format!("Invalid environment: {}", other)),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Filter directive, e.g. `info` or `sm_core=debug,info`
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: LogFormat,

    /// ANSI colors (terminal only)
    #[serde(default = "default_colored")]
    pub colored: bool,

    /// Include file and line in each event
    #[serde(default)]
    pub source_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            colored: default_colored(),
            source_location: false,
        }
    }
}

impl LoggingConfig {
    /// Defaults for `env`: verbose pretty output locally, JSON warnings in production
    pub fn for_environment(env: Environment) -> Self {
        let (level, format, colored, source_location) = match env {
            Environment::Development => ("debug", LogFormat::Pretty, true, true),
            Environment::Staging => ("info", LogFormat::Compact, false, false),
            Environment::Production => ("warn", LogFormat::Json, false, false),
        };
        Self {
            level: level.to_string(),
            format,
            colored,
            source_location,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Pretty,
    Compact,
}

fn default_log_level() -> String {
    String::from("info")
}

fn default_log_format() -> LogFormat {
    LogFormat::Pretty
}

fn default_colored() -> bool {
    true
}
