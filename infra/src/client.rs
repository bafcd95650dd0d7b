//! Client container.
//!
//! Built once at start from a [`ClientConfig`] and shared by the UI layer;
//! every repository receives the same transport and session store.

use std::sync::Arc;

use sm_core::repositories::{
    HttpAuthRepository, HttpCartRepository, HttpOrderRepository, HttpPaymentRepository,
    HttpProductRepository, HttpSellerRepository, RepositoryContext,
};
use sm_core::session::SessionStore;
use sm_core::transport::Transport;
use sm_shared::ClientConfig;

use crate::http::ReqwestTransport;
use crate::session::FileSessionStore;
use crate::InfrastructureError;

/// All repositories wired to one transport and session store
#[derive(Clone)]
pub struct ShopClient {
    config: ClientConfig,
    session: Arc<dyn SessionStore>,
    pub auth: HttpAuthRepository,
    pub products: HttpProductRepository,
    pub cart: HttpCartRepository,
    pub orders: HttpOrderRepository,
    pub payments: HttpPaymentRepository,
    pub sellers: HttpSellerRepository,
}

impl ShopClient {
    /// Build the reqwest transport and file session store from `config`
    pub async fn connect(config: ClientConfig) -> Result<Self, InfrastructureError> {
        let transport = Arc::new(ReqwestTransport::new(config.api.clone())?);
        let session = Arc::new(FileSessionStore::open(config.session.path.clone()).await?);

        tracing::info!(
            environment = %config.environment,
            session_path = %config.session.path.display(),
            "Shop client ready"
        );
        Ok(Self::with_parts(config, transport, session))
    }

    /// Wire the repositories over caller-provided collaborators
    pub fn with_parts(
        config: ClientConfig,
        transport: Arc<dyn Transport>,
        session: Arc<dyn SessionStore>,
    ) -> Self {
        let ctx = RepositoryContext::new(transport, session.clone(), config.language);
        Self {
            auth: HttpAuthRepository::new(ctx.clone()),
            products: HttpProductRepository::new(ctx.clone()),
            cart: HttpCartRepository::new(ctx.clone()),
            orders: HttpOrderRepository::new(ctx.clone()),
            payments: HttpPaymentRepository::new(ctx.clone()),
            sellers: HttpSellerRepository::new(ctx),
            session,
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn session(&self) -> &Arc<dyn SessionStore> {
        &self.session
    }

    /// Absolute URL for an image path returned by the backend
    pub fn image_url(&self, path: Option<&str>) -> Option<String> {
        sm_shared::image::image_url(&self.config.api.image_base_url, path)
    }
}
