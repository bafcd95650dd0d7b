//! HTTP implementation of the seller repository

use async_trait::async_trait;
use sm_shared::{Id, MessageKey};

use crate::classifier::StatusOverrides;
use crate::domain::entities::seller::Seller;
use crate::domain::value_objects::SellerRequest;
use crate::errors::Outcome;
use crate::repositories::context::RepositoryContext;
use crate::transport::ApiRequest;

use super::r#trait::SellerRepository;

const MY_STORE: StatusOverrides = StatusOverrides::new(&[(404, MessageKey::StoreNotFound)]);
const CREATE_STORE: StatusOverrides = StatusOverrides::new(&[
    (409, MessageKey::StoreAlreadyExists),
    (422, MessageKey::InvalidData),
]);
const UPDATE_STORE: StatusOverrides = StatusOverrides::new(&[
    (404, MessageKey::StoreNotFound),
    (422, MessageKey::InvalidData),
]);
const GET_SELLER: StatusOverrides = StatusOverrides::new(&[(404, MessageKey::SellerNotFound)]);

#[derive(Clone)]
pub struct HttpSellerRepository {
    ctx: RepositoryContext,
}

impl HttpSellerRepository {
    pub fn new(ctx: RepositoryContext) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl SellerRepository for HttpSellerRepository {
    #[tracing::instrument(skip(self))]
    async fn my_store(&self) -> Outcome<Seller> {
        self.ctx
            .fetch_authorized(ApiRequest::get("/seller/store"), &MY_STORE)
            .await
    }

    #[tracing::instrument(skip(self, request), fields(store_name = %request.store_name))]
    async fn create_store(&self, request: SellerRequest) -> Outcome<Seller> {
        let call = self.ctx.encode(ApiRequest::post("/seller/store"), &request)?;
        let store: Seller = self.ctx.fetch_authorized(call, &CREATE_STORE).await?;
        tracing::info!(event = "store_created", "Seller store created");
        Ok(store)
    }

    #[tracing::instrument(skip(self, request), fields(store_name = %request.store_name))]
    async fn update_store(&self, request: SellerRequest) -> Outcome<Seller> {
        let call = self.ctx.encode(ApiRequest::put("/seller/store"), &request)?;
        self.ctx.fetch_authorized(call, &UPDATE_STORE).await
    }

    #[tracing::instrument(skip(self), fields(seller_id = %id))]
    async fn get_seller(&self, id: &Id) -> Outcome<Seller> {
        self.ctx
            .fetch(
                ApiRequest::get(format!("/sellers/{}", id.path_segment())),
                &GET_SELLER,
            )
            .await
    }
}
