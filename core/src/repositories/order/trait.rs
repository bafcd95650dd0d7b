//! Order repository trait. Orders belong to the signed-in account.

use async_trait::async_trait;
use sm_shared::{Id, Pagination};

use crate::domain::entities::order::Order;
use crate::domain::value_objects::CreateOrderRequest;
use crate::errors::Outcome;

#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Check out; without explicit items the current cart is ordered
    async fn create_order(&self, request: CreateOrderRequest) -> Outcome<Order>;

    async fn list_orders(&self, pagination: Option<Pagination>) -> Outcome<Vec<Order>>;

    async fn get_order(&self, id: &Id) -> Outcome<Order>;

    /// Cancel an order that has not been paid yet
    async fn cancel_order(&self, id: &Id) -> Outcome<Order>;
}
