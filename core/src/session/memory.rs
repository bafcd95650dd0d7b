//! In-memory session store, used in tests and for ephemeral sessions

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::session::Session;
use crate::errors::SessionStoreError;

use super::r#trait::SessionStore;

/// Session store that lives only as long as the process
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    session: Arc<RwLock<Session>>,
}

impl InMemorySessionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that starts with `session`
    pub fn with_session(session: Session) -> Self {
        Self {
            session: Arc::new(RwLock::new(session)),
        }
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn session(&self) -> Session {
        self.session.read().await.clone()
    }

    async fn save_tokens(
        &self,
        access_token: &str,
        refresh_token: Option<&str>,
        email: Option<&str>,
    ) -> Result<(), SessionStoreError> {
        let mut session = self.session.write().await;
        session.apply(access_token, refresh_token, email);
        Ok(())
    }

    async fn clear_tokens(&self) -> Result<(), SessionStoreError> {
        *self.session.write().await = Session::default();
        Ok(())
    }
}
