//! Product catalog repository trait. All operations are public.

use async_trait::async_trait;
use sm_shared::Id;

use crate::domain::entities::product::{Category, Product, ProductPage};
use crate::domain::value_objects::ProductQuery;
use crate::errors::Outcome;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// One page of products matching `query`
    async fn list_products(&self, query: ProductQuery) -> Outcome<ProductPage>;

    async fn get_product(&self, id: &Id) -> Outcome<Product>;

    async fn list_categories(&self) -> Outcome<Vec<Category>>;
}
