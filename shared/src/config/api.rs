//! Backend API connection configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default backend host
pub const DEFAULT_BASE_URL: &str = "https://api.shopmobile.id";

/// Default versioned prefix every resource path lives under
pub const DEFAULT_API_PREFIX: &str = "/api/v1";

/// Default base used to resolve relative image paths
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://api.shopmobile.id/";

/// Connect, read and write timeout applied by the transport
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Backend API configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Scheme and host of the backend, without trailing slash
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Version prefix prepended to every resource path
    #[serde(default = "default_api_prefix")]
    pub api_prefix: String,

    /// Base URL for relative image paths returned by the backend
    #[serde(default = "default_image_base_url")]
    pub image_base_url: String,

    /// TCP connect timeout in seconds
    #[serde(default = "default_timeout")]
    pub connect_timeout_secs: u64,

    /// Response read timeout in seconds
    #[serde(default = "default_timeout")]
    pub read_timeout_secs: u64,

    /// Request write timeout in seconds
    #[serde(default = "default_timeout")]
    pub write_timeout_secs: u64,

    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_prefix: default_api_prefix(),
            image_base_url: default_image_base_url(),
            connect_timeout_secs: DEFAULT_TIMEOUT_SECS,
            read_timeout_secs: DEFAULT_TIMEOUT_SECS,
            write_timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: default_user_agent(),
        }
    }
}

impl ApiConfig {
    /// Create a configuration pointing at the given backend host
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Set the image base URL
    pub fn with_image_base_url(mut self, image_base_url: impl Into<String>) -> Self {
        self.image_base_url = image_base_url.into();
        self
    }

    /// Set all three timeouts at once
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.connect_timeout_secs = secs;
        self.read_timeout_secs = secs;
        self.write_timeout_secs = secs;
        self
    }

    /// Build the absolute URL for a resource path such as `/products/7`
    pub fn endpoint(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let prefix = self.api_prefix.trim_matches('/');
        let path = path.trim_start_matches('/');
        if prefix.is_empty() {
            format!("{}/{}", base, path)
        } else {
            format!("{}/{}/{}", base, prefix, path)
        }
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// Overall request timeout; reads and writes share one deadline per exchange
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.read_timeout_secs.max(self.write_timeout_secs))
    }
}

fn default_base_url() -> String {
    String::from(DEFAULT_BASE_URL)
}

fn default_api_prefix() -> String {
    String::from(DEFAULT_API_PREFIX)
}

fn default_image_base_url() -> String {
    String::from(DEFAULT_IMAGE_BASE_URL)
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_user_agent() -> String {
    format!("shopmobile-client/{}", env!("CARGO_PKG_VERSION"))
}
