//! Browse the catalog and, with credentials in the environment, sign in
//! and show the cart.
//!
//! ```sh
//! SHOP__API__BASE_URL=http://localhost:8080 \
//! SHOP_DEMO_EMAIL=buyer@shop.id SHOP_DEMO_PASSWORD=secret \
//! cargo run -p sm_infra --example shop_client_demo
//! ```

use anyhow::Context;
use sm_core::domain::value_objects::{LoginRequest, ProductQuery};
use sm_core::repositories::{AuthRepository, CartRepository, ProductRepository};
use sm_infra::{init_tracing, load_config, ShopClient};
use sm_shared::Pagination;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = load_config(None).context("loading configuration")?;
    init_tracing(&config.logging).context("initializing tracing")?;

    let shop = ShopClient::connect(config).await?;

    match shop
        .products
        .list_products(ProductQuery::default().page(Pagination::new(1, 5)))
        .await
    {
        Ok(page) => {
            for product in &page.items {
                println!(
                    "{:>8} {:<32} {:>12.0} {}",
                    product.id.to_string(),
                    product.name,
                    product.price,
                    product
                        .cover_image_url(&shop.config().api.image_base_url)
                        .unwrap_or_default()
                );
            }
        }
        Err(err) => println!("Could not load products: {}", err),
    }

    let (Ok(email), Ok(password)) = (
        std::env::var("SHOP_DEMO_EMAIL"),
        std::env::var("SHOP_DEMO_PASSWORD"),
    ) else {
        return Ok(());
    };

    match shop.auth.login(LoginRequest::new(email, password)).await {
        Ok(_) => {
            let cart = shop.cart.get_cart().await;
            match cart {
                Ok(cart) => println!("Cart: {} item(s), total {:.0}", cart.item_count(), cart.total()),
                Err(err) => println!("Could not load cart: {}", err),
            }
        }
        Err(err) if err.requires_verification() => println!(
            "Verify {} before signing in: {}",
            err.verification_email().unwrap_or_default(),
            err
        ),
        Err(err) => println!("Login failed: {}", err),
    }

    Ok(())
}
