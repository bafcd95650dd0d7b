//! Tests for the HTTP cart repository

use serde_json::json;

use sm_shared::Id;

use crate::domain::value_objects::{AddCartItemRequest, UpdateCartItemRequest};
use crate::errors::RepoError;
use crate::repositories::cart::{CartRepository, HttpCartRepository};
use crate::transport::HttpMethod;

use super::mocks::{setup, signed_in};

const CART: &str = r#"{"success": true, "data": {
    "id": 1,
    "items": [{"id": 5, "product_id": 10, "quantity": 2, "price": 12500}],
    "total_price": 25000
}}"#;

#[tokio::test]
async fn test_mutations_without_token_send_nothing() {
    let (transport, _session, ctx) = setup();
    let repo = HttpCartRepository::new(ctx);
    let not_logged_in = RepoError::generic("You are not logged in");

    assert_eq!(repo.get_cart().await.unwrap_err(), not_logged_in);
    assert_eq!(
        repo.add_item(AddCartItemRequest::new(10u64, 1))
            .await
            .unwrap_err(),
        not_logged_in
    );
    assert_eq!(
        repo.update_item(&Id::from(5u64), UpdateCartItemRequest { quantity: 3 })
            .await
            .unwrap_err(),
        not_logged_in
    );
    assert_eq!(
        repo.remove_item(&Id::from(5u64)).await.unwrap_err(),
        not_logged_in
    );
    assert_eq!(repo.clear_cart().await.unwrap_err(), not_logged_in);

    assert_eq!(transport.request_count().await, 0);
}

#[tokio::test]
async fn test_add_item() {
    let (transport, _session, ctx) = signed_in();
    transport.respond(200, CART).await;
    let repo = HttpCartRepository::new(ctx);

    let cart = repo
        .add_item(AddCartItemRequest::new(10u64, 2))
        .await
        .unwrap();

    assert_eq!(cart.item_count(), 2);
    assert_eq!(cart.total(), 25_000.0);

    let request = transport.last_request().await;
    assert_eq!(request.method, HttpMethod::Post);
    assert_eq!(request.path, "/cart/items");
    assert_eq!(request.bearer_token.as_deref(), Some("access-1"));
    assert_eq!(request.body, Some(json!({"product_id": 10, "quantity": 2})));
}

#[tokio::test]
async fn test_update_item() {
    let (transport, _session, ctx) = signed_in();
    transport.respond(200, CART).await;
    let repo = HttpCartRepository::new(ctx);

    repo.update_item(&Id::from(5u64), UpdateCartItemRequest { quantity: 2 })
        .await
        .unwrap();

    let request = transport.last_request().await;
    assert_eq!(request.method, HttpMethod::Put);
    assert_eq!(request.path, "/cart/items/5");
    assert_eq!(request.body, Some(json!({"quantity": 2})));
}

#[tokio::test]
async fn test_update_item_backend_message() {
    let (transport, _session, ctx) = signed_in();
    transport
        .respond(
            400,
            r#"{"success": false, "error": {"message": "Stok tidak mencukupi"}}"#,
        )
        .await;
    let repo = HttpCartRepository::new(ctx);

    let err = repo
        .update_item(&Id::from(5u64), UpdateCartItemRequest { quantity: 99 })
        .await
        .unwrap_err();

    assert_eq!(err, RepoError::generic("Stok tidak mencukupi"));
}

#[tokio::test]
async fn test_remove_item() {
    let (transport, _session, ctx) = signed_in();
    transport
        .respond(200, r#"{"success": true, "message": "Item dihapus"}"#)
        .await;
    let repo = HttpCartRepository::new(ctx);

    let message = repo.remove_item(&Id::from(5u64)).await.unwrap();

    assert_eq!(message.as_deref(), Some("Item dihapus"));
    let request = transport.last_request().await;
    assert_eq!(request.method, HttpMethod::Delete);
    assert_eq!(request.path, "/cart/items/5");
}

#[tokio::test]
async fn test_remove_missing_item() {
    let (transport, _session, ctx) = signed_in();
    transport.respond(404, "{}").await;
    let repo = HttpCartRepository::new(ctx);

    let err = repo.remove_item(&Id::from(5u64)).await.unwrap_err();

    assert_eq!(err, RepoError::generic("Cart item not found"));
}

#[tokio::test]
async fn test_clear_cart_expired_session() {
    let (transport, _session, ctx) = signed_in();
    transport
        .respond(401, r#"{"message": "Unauthorized"}"#)
        .await;
    let repo = HttpCartRepository::new(ctx);

    let err = repo.clear_cart().await.unwrap_err();

    assert_eq!(err, RepoError::token_expired("Unauthorized"));
    assert_eq!(transport.last_request().await.path, "/cart");
}
