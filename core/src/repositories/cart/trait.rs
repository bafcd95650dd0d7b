//! Cart repository trait.
//!
//! Every operation needs a signed-in session; without an access token they
//! fail with a not-logged-in error and no request is sent.

use async_trait::async_trait;
use sm_shared::Id;

use crate::domain::entities::cart::Cart;
use crate::domain::value_objects::{AddCartItemRequest, UpdateCartItemRequest};
use crate::errors::Outcome;

#[async_trait]
pub trait CartRepository: Send + Sync {
    async fn get_cart(&self) -> Outcome<Cart>;

    /// Add a product; returns the updated cart
    async fn add_item(&self, request: AddCartItemRequest) -> Outcome<Cart>;

    /// Change the quantity of a cart line; returns the updated cart
    async fn update_item(&self, item_id: &Id, request: UpdateCartItemRequest) -> Outcome<Cart>;

    async fn remove_item(&self, item_id: &Id) -> Outcome<Option<String>>;

    async fn clear_cart(&self) -> Outcome<Option<String>>;
}
