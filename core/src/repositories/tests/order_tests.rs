//! Tests for the HTTP order repository

use sm_shared::{Id, Pagination};

use crate::domain::entities::order::OrderStatus;
use crate::domain::value_objects::CreateOrderRequest;
use crate::errors::RepoError;
use crate::repositories::order::{HttpOrderRepository, OrderRepository};

use super::mocks::{setup, signed_in};

const ORDER: &str = r#"{"success": true, "data": {
    "id": 12,
    "order_number": "INV-0012",
    "status": "pending",
    "items": [{"product_id": 10, "product_name": "Kopi", "quantity": 1, "price": 25000}],
    "total_amount": 25000
}}"#;

#[tokio::test]
async fn test_create_order() {
    let (transport, _session, ctx) = signed_in();
    transport.respond(201, ORDER).await;
    let repo = HttpOrderRepository::new(ctx);

    let order = repo
        .create_order(CreateOrderRequest {
            shipping_address: "Jl. Sudirman 5, Jakarta".to_string(),
            payment_method: "bank_transfer".to_string(),
            notes: Some("Leave at the gate".to_string()),
            items: Vec::new(),
        })
        .await
        .unwrap();

    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.display_number(), "INV-0012");
    assert_eq!(transport.last_request().await.path, "/orders");
}

#[tokio::test]
async fn test_list_orders_with_pagination() {
    let (transport, _session, ctx) = signed_in();
    transport.respond(200, r#"{"success": true, "data": []}"#).await;
    let repo = HttpOrderRepository::new(ctx);

    let orders = repo
        .list_orders(Some(Pagination::new(2, 10)))
        .await
        .unwrap();

    assert!(orders.is_empty());
    let request = transport.last_request().await;
    assert_eq!(
        request.query,
        vec![
            ("page".to_string(), "2".to_string()),
            ("limit".to_string(), "10".to_string())
        ]
    );
}

#[tokio::test]
async fn test_get_order_not_found() {
    let (transport, _session, ctx) = signed_in();
    transport.respond(404, r#"{"message": "not found"}"#).await;
    let repo = HttpOrderRepository::new(ctx);

    let err = repo.get_order(&Id::from(404u64)).await.unwrap_err();

    assert_eq!(err, RepoError::generic("Order not found"));
}

#[tokio::test]
async fn test_cancel_order_conflict() {
    let (transport, _session, ctx) = signed_in();
    transport
        .respond(409, r#"{"message": "order already shipped"}"#)
        .await;
    let repo = HttpOrderRepository::new(ctx);

    let err = repo.cancel_order(&Id::from(12u64)).await.unwrap_err();

    assert_eq!(err.message(), "This order can no longer be cancelled");
    assert_eq!(transport.last_request().await.path, "/orders/12/cancel");
}

#[tokio::test]
async fn test_orders_require_login() {
    let (transport, _session, ctx) = setup();
    let repo = HttpOrderRepository::new(ctx);

    let err = repo.list_orders(None).await.unwrap_err();

    assert_eq!(err, RepoError::generic("You are not logged in"));
    assert_eq!(transport.request_count().await, 0);
}

#[tokio::test]
async fn test_string_order_id_stays_one_path_segment() {
    let (transport, _session, ctx) = signed_in();
    transport.respond(200, ORDER).await;
    let repo = HttpOrderRepository::new(ctx);

    repo.cancel_order(&Id::from("INV/0012?x#y")).await.unwrap();

    assert_eq!(
        transport.last_request().await.path,
        "/orders/INV%2F0012%3Fx%23y/cancel"
    );
}
