//! HTTP-level tests for the storefront client against a mock server.

#![allow(clippy::unwrap_used)]

use order_sync_core::{ProductId, UserId};
use order_sync_store::{StoreClient, StoreConfig, StoreError};
use rust_decimal_macros::dec;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> StoreClient {
    StoreClient::new(&StoreConfig {
        base_url: server.uri(),
    })
}

#[tokio::test]
async fn carts_decodes_the_storefront_payload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/carts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": 1,
                "userId": 1,
                "date": "2020-03-02T00:00:00.000Z",
                "products": [
                    { "productId": 1, "quantity": 4 },
                    { "productId": 2, "quantity": 1 },
                    { "productId": 3, "quantity": 6 }
                ],
                "__v": 0
            },
            {
                "id": 2,
                "userId": 2,
                "date": "2020-01-02T00:00:00.000Z",
                "products": [
                    { "productId": 2, "quantity": 4 },
                    { "productId": 1, "quantity": 10 },
                    { "productId": 5, "quantity": 2 }
                ],
                "__v": 0
            }
        ])))
        .mount(&server)
        .await;

    let carts = client_for(&server).carts().await.unwrap();

    assert_eq!(carts.len(), 2);
    assert_eq!(carts[0].user_id, UserId::new(1));
    assert_eq!(carts[1].user_id, UserId::new(2));
    assert_eq!(carts[0].lines.len(), 3);
    assert_eq!(carts[1].lines[2].product_id, ProductId::new(5));
    assert_eq!(carts[1].lines[1].quantity, 10);
}

#[tokio::test]
async fn user_fetches_by_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1,
            "email": "john@gmail.com",
            "username": "johnd",
            "name": { "firstname": "john", "lastname": "doe" }
        })))
        .mount(&server)
        .await;

    let user = client_for(&server).user(UserId::new(1)).await.unwrap();

    assert_eq!(user.email, "john@gmail.com");
    assert_eq!(user.full_name(), "john doe");
}

#[tokio::test]
async fn product_fetches_decimal_price() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1,
            "title": "Fjallraven Backpack",
            "price": 109.95,
            "category": "men's clothing"
        })))
        .mount(&server)
        .await;

    let product = client_for(&server)
        .product(ProductId::new(1))
        .await
        .unwrap();

    assert_eq!(product.title, "Fjallraven Backpack");
    assert_eq!(product.price, dec!(109.95));
}

#[tokio::test]
async fn non_success_status_surfaces_endpoint_and_code() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/carts"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = client_for(&server).carts().await.unwrap_err();

    match err {
        StoreError::Status { endpoint, status } => {
            assert_eq!(endpoint, "/carts");
            assert_eq!(status, 503);
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_json_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/carts"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client_for(&server).carts().await.unwrap_err();

    assert!(matches!(err, StoreError::Decode { .. }));
}
