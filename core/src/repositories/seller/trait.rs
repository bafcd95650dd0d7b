//! Seller repository trait.
//!
//! The signed-in account manages its own store; any seller's public profile
//! can be fetched without a session.

use async_trait::async_trait;
use sm_shared::Id;

use crate::domain::entities::seller::Seller;
use crate::domain::value_objects::SellerRequest;
use crate::errors::Outcome;

#[async_trait]
pub trait SellerRepository: Send + Sync {
    /// Store owned by the signed-in account
    async fn my_store(&self) -> Outcome<Seller>;

    async fn create_store(&self, request: SellerRequest) -> Outcome<Seller>;

    async fn update_store(&self, request: SellerRequest) -> Outcome<Seller>;

    /// Public seller profile
    async fn get_seller(&self, id: &Id) -> Outcome<Seller>;
}
