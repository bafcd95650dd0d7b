//! Tests for the HTTP payment repository

use serde_json::json;

use sm_shared::Id;

use crate::domain::entities::payment::PaymentStatus;
use crate::domain::value_objects::CreatePaymentRequest;
use crate::errors::RepoError;
use crate::repositories::payment::{HttpPaymentRepository, PaymentRepository};

use super::mocks::signed_in;

#[tokio::test]
async fn test_create_payment() {
    let (transport, _session, ctx) = signed_in();
    transport
        .respond(
            201,
            r#"{"success": true, "data": {
                "id": 30, "order_id": 12, "amount": 25000,
                "payment_method": "ewallet", "status": "pending",
                "redirect_url": "https://pay.example/tx/30"
            }}"#,
        )
        .await;
    let repo = HttpPaymentRepository::new(ctx);

    let payment = repo
        .create_payment(CreatePaymentRequest {
            order_id: Id::from(12u64),
            method: "ewallet".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(payment.status, PaymentStatus::Pending);
    assert_eq!(
        payment.payment_url.as_deref(),
        Some("https://pay.example/tx/30")
    );

    let request = transport.last_request().await;
    assert_eq!(request.path, "/payments");
    assert_eq!(
        request.body,
        Some(json!({"order_id": 12, "payment_method": "ewallet"}))
    );
}

#[tokio::test]
async fn test_get_payment_not_found() {
    let (transport, _session, ctx) = signed_in();
    transport.respond(404, "").await;
    let repo = HttpPaymentRepository::new(ctx);

    let err = repo.get_payment(&Id::from(1u64)).await.unwrap_err();

    assert_eq!(err, RepoError::generic("Payment not found"));
    assert_eq!(transport.last_request().await.path, "/payments/1");
}
