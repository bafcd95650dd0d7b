//! HTTP implementation of the cart repository

use async_trait::async_trait;
use sm_shared::{Id, MessageKey};

use crate::classifier::StatusOverrides;
use crate::domain::entities::cart::Cart;
use crate::domain::value_objects::{AddCartItemRequest, UpdateCartItemRequest};
use crate::errors::Outcome;
use crate::repositories::context::RepositoryContext;
use crate::transport::ApiRequest;

use super::r#trait::CartRepository;

const CART_ITEM: StatusOverrides = StatusOverrides::new(&[(404, MessageKey::CartItemNotFound)]);

#[derive(Clone)]
pub struct HttpCartRepository {
    ctx: RepositoryContext,
}

impl HttpCartRepository {
    pub fn new(ctx: RepositoryContext) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl CartRepository for HttpCartRepository {
    #[tracing::instrument(skip(self))]
    async fn get_cart(&self) -> Outcome<Cart> {
        self.ctx
            .fetch_authorized(ApiRequest::get("/cart"), &StatusOverrides::NONE)
            .await
    }

    #[tracing::instrument(skip(self))]
    async fn add_item(&self, request: AddCartItemRequest) -> Outcome<Cart> {
        let call = self.ctx.encode(ApiRequest::post("/cart/items"), &request)?;
        self.ctx.fetch_authorized(call, &StatusOverrides::NONE).await
    }

    #[tracing::instrument(skip(self), fields(item_id = %item_id))]
    async fn update_item(&self, item_id: &Id, request: UpdateCartItemRequest) -> Outcome<Cart> {
        let call = self
            .ctx
            .encode(
                ApiRequest::put(format!("/cart/items/{}", item_id.path_segment())),
                &request,
            )?;
        self.ctx.fetch_authorized(call, &CART_ITEM).await
    }

    #[tracing::instrument(skip(self), fields(item_id = %item_id))]
    async fn remove_item(&self, item_id: &Id) -> Outcome<Option<String>> {
        self.ctx
            .acknowledge_authorized(
                ApiRequest::delete(format!("/cart/items/{}", item_id.path_segment())),
                &CART_ITEM,
            )
            .await
    }

    #[tracing::instrument(skip(self))]
    async fn clear_cart(&self) -> Outcome<Option<String>> {
        self.ctx
            .acknowledge_authorized(ApiRequest::delete("/cart"), &StatusOverrides::NONE)
            .await
    }
}
