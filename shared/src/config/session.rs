//! Session persistence configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where the durable session store keeps its data
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Path of the session file
    #[serde(default = "default_session_path")]
    pub path: PathBuf,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            path: default_session_path(),
        }
    }
}

impl SessionConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

fn default_session_path() -> PathBuf {
    PathBuf::from(".shopmobile/session.json")
}
