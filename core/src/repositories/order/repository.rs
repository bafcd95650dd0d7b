//! HTTP implementation of the order repository

use async_trait::async_trait;
use sm_shared::{Id, MessageKey, Pagination};

use crate::classifier::StatusOverrides;
use crate::domain::entities::order::Order;
use crate::domain::value_objects::CreateOrderRequest;
use crate::errors::Outcome;
use crate::repositories::context::RepositoryContext;
use crate::transport::ApiRequest;

use super::r#trait::OrderRepository;

const GET_ORDER: StatusOverrides = StatusOverrides::new(&[(404, MessageKey::OrderNotFound)]);
const CANCEL_ORDER: StatusOverrides = StatusOverrides::new(&[
    (404, MessageKey::OrderNotFound),
    (409, MessageKey::OrderNotCancellable),
]);

#[derive(Clone)]
pub struct HttpOrderRepository {
    ctx: RepositoryContext,
}

impl HttpOrderRepository {
    pub fn new(ctx: RepositoryContext) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl OrderRepository for HttpOrderRepository {
    #[tracing::instrument(skip(self, request), fields(items = request.items.len()))]
    async fn create_order(&self, request: CreateOrderRequest) -> Outcome<Order> {
        let call = self.ctx.encode(ApiRequest::post("/orders"), &request)?;
        let order: Order = self.ctx.fetch_authorized(call, &StatusOverrides::NONE).await?;
        tracing::info!(
            order = %order.display_number(),
            event = "order_created",
            "Order placed"
        );
        Ok(order)
    }

    #[tracing::instrument(skip(self))]
    async fn list_orders(&self, pagination: Option<Pagination>) -> Outcome<Vec<Order>> {
        let call = ApiRequest::get("/orders")
            .query_opt("page", pagination.map(|p| p.page))
            .query_opt("limit", pagination.map(|p| p.per_page));
        self.ctx.fetch_authorized(call, &StatusOverrides::NONE).await
    }

    #[tracing::instrument(skip(self), fields(order_id = %id))]
    async fn get_order(&self, id: &Id) -> Outcome<Order> {
        self.ctx
            .fetch_authorized(
                ApiRequest::get(format!("/orders/{}", id.path_segment())),
                &GET_ORDER,
            )
            .await
    }

    #[tracing::instrument(skip(self), fields(order_id = %id))]
    async fn cancel_order(&self, id: &Id) -> Outcome<Order> {
        self.ctx
            .fetch_authorized(
                ApiRequest::post(format!("/orders/{}/cancel", id.path_segment())),
                &CANCEL_ORDER,
            )
            .await
    }
}
