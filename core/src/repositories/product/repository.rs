//! HTTP implementation of the product repository

use async_trait::async_trait;
use sm_shared::{Id, MessageKey};

use crate::classifier::StatusOverrides;
use crate::domain::entities::product::{Category, Product, ProductListing, ProductPage};
use crate::domain::value_objects::ProductQuery;
use crate::errors::Outcome;
use crate::repositories::context::RepositoryContext;
use crate::transport::ApiRequest;

use super::r#trait::ProductRepository;

const GET_PRODUCT: StatusOverrides = StatusOverrides::new(&[(404, MessageKey::ProductNotFound)]);

#[derive(Clone)]
pub struct HttpProductRepository {
    ctx: RepositoryContext,
}

impl HttpProductRepository {
    pub fn new(ctx: RepositoryContext) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl ProductRepository for HttpProductRepository {
    #[tracing::instrument(skip(self))]
    async fn list_products(&self, query: ProductQuery) -> Outcome<ProductPage> {
        let mut call = ApiRequest::get("/products");
        for (key, value) in query.to_query_pairs() {
            call = call.query(key, value);
        }

        let listing: ProductListing = self.ctx.fetch(call, &StatusOverrides::NONE).await?;
        Ok(ProductPage::from(listing))
    }

    #[tracing::instrument(skip(self), fields(product_id = %id))]
    async fn get_product(&self, id: &Id) -> Outcome<Product> {
        self.ctx
            .fetch(
                ApiRequest::get(format!("/products/{}", id.path_segment())),
                &GET_PRODUCT,
            )
            .await
    }

    #[tracing::instrument(skip(self))]
    async fn list_categories(&self) -> Outcome<Vec<Category>> {
        self.ctx
            .fetch(ApiRequest::get("/categories"), &StatusOverrides::NONE)
            .await
    }
}
