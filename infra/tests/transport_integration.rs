//! Integration tests for the reqwest transport against a mock backend

use serde_json::json;
use sm_core::transport::{ApiRequest, Transport, TransportError};
use sm_infra::http::ReqwestTransport;
use sm_shared::ApiConfig;
use std::time::Duration;
use wiremock::matchers::{body_json, header, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn transport(server: &MockServer) -> ReqwestTransport {
    ReqwestTransport::new(ApiConfig::new(server.uri())).unwrap()
}

#[tokio::test]
async fn test_sends_headers_query_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/cart/items"))
        .and(query_param("source", "detail"))
        .and(header("authorization", "Bearer tok-1"))
        .and(header("accept", "application/json"))
        .and(header_exists("x-request-id"))
        .and(body_json(json!({"product_id": 10, "quantity": 2})))
        .respond_with(ResponseTemplate::new(201).set_body_string(r#"{"success":true}"#))
        .expect(1)
        .mount(&server)
        .await;

    let request = ApiRequest::post("/cart/items")
        .query("source", "detail")
        .bearer("tok-1")
        .json(&json!({"product_id": 10, "quantity": 2}))
        .unwrap();
    let response = transport(&server).execute(request).await.unwrap();

    assert_eq!(response.status, 201);
    assert_eq!(response.body, r#"{"success":true}"#);
}

#[tokio::test]
async fn test_error_statuses_are_not_transport_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/auth/me"))
        .respond_with(ResponseTemplate::new(401).set_body_string(r#"{"message":"Unauthorized"}"#))
        .mount(&server)
        .await;

    let response = transport(&server)
        .execute(ApiRequest::get("/auth/me"))
        .await
        .unwrap();

    assert_eq!(response.status, 401);
    assert!(!response.is_success());
}

#[tokio::test]
async fn test_slow_backend_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/products"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
        .mount(&server)
        .await;

    let transport = ReqwestTransport::new(ApiConfig::new(server.uri()).with_timeout_secs(1)).unwrap();
    let err = transport
        .execute(ApiRequest::get("/products"))
        .await
        .unwrap_err();

    assert!(matches!(err, TransportError::Timeout(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_refused_connection_is_host_unreachable() {
    let transport = ReqwestTransport::new(ApiConfig::new("http://127.0.0.1:1")).unwrap();

    let err = transport
        .execute(ApiRequest::get("/products"))
        .await
        .unwrap_err();

    assert!(matches!(err, TransportError::HostUnreachable(_)), "got {:?}", err);
}
