//! Stub API server exercised over real HTTP.

#![allow(clippy::unwrap_used)]

use reqwest::{Client, Method, StatusCode, header};
use serde_json::{Value, json};

use foodiehub_integration_tests::TestServer;
use foodiehub_storefront::catalog::MenuCatalog;

const DEV_ORIGIN: &str = "http://localhost:5173";
const PROD_ORIGIN: &str = "https://d3restaurantapp.azurewebsites.net";

fn allow_origin(response: &reqwest::Response) -> Option<&str> {
    response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .map(|v| v.to_str().unwrap())
}

#[tokio::test]
async fn test_api_test_route_from_allowed_origin() {
    let server = TestServer::start().await;

    let response = Client::new()
        .get(server.url("/api/test"))
        .header(header::ORIGIN, DEV_ORIGIN)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(allow_origin(&response), Some(DEV_ORIGIN));
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
            .unwrap(),
        "true"
    );
    assert!(response.headers().contains_key("x-request-id"));

    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"message": "API is working!"}));
}

#[tokio::test]
async fn test_disallowed_origin_gets_no_cors_grant() {
    let server = TestServer::start().await;

    let response = Client::new()
        .get(server.url("/api/test"))
        .header(header::ORIGIN, "https://evil.example")
        .send()
        .await
        .unwrap();

    assert_eq!(allow_origin(&response), None);
}

#[tokio::test]
async fn test_production_origin_set() {
    let server = TestServer::with_catalog(MenuCatalog::new(), |key| {
        (key == "STOREFRONT_ENV").then(|| "production".to_string())
    })
    .await;
    let client = Client::new();

    let response = client
        .get(server.url("/api/test"))
        .header(header::ORIGIN, PROD_ORIGIN)
        .send()
        .await
        .unwrap();
    assert_eq!(allow_origin(&response), Some(PROD_ORIGIN));

    let response = client
        .get(server.url("/api/test"))
        .header(header::ORIGIN, DEV_ORIGIN)
        .send()
        .await
        .unwrap();
    assert_eq!(allow_origin(&response), None);
}

#[tokio::test]
async fn test_preflight() {
    let server = TestServer::start().await;

    let response = Client::new()
        .request(Method::OPTIONS, server.url("/api/menu/"))
        .header(header::ORIGIN, DEV_ORIGIN)
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .send()
        .await
        .unwrap();

    assert!(response.status().is_success());
    assert_eq!(allow_origin(&response), Some(DEV_ORIGIN));
    let methods = response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_METHODS)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(methods.contains("POST"));
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let server = TestServer::start().await;

    let response = Client::new()
        .get(server.url("/api/nope"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"error": "Not found"}));
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let server = TestServer::start().await;

    let response = Client::new()
        .get(server.url("/health"))
        .header("x-request-id", "trace-abc-123")
        .send()
        .await
        .unwrap();

    assert_eq!(response.headers().get("x-request-id").unwrap(), "trace-abc-123");
    assert_eq!(response.text().await.unwrap(), "ok");
}

#[tokio::test]
async fn test_menu_crud_over_http() {
    let server = TestServer::start().await;
    let client = Client::new();

    let response = client.get(server.url("/api/menu/")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CACHE_CONTROL).unwrap(),
        "no-cache, no-store, must-revalidate"
    );
    let items: Vec<Value> = response.json().await.unwrap();
    assert_eq!(items.len(), 8);

    let created: Value = client
        .post(server.url("/api/menu/"))
        .json(&json!({
            "name": "Paneer Tikka",
            "description": "Char-grilled cottage cheese",
            "price": 229,
            "category": "starters",
            "image": "/images/tikka.jpg",
            "popular": true
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(created["id"], 9);
    assert_eq!(created["price"], 229);
    assert_eq!(server.catalog.len().await, 9);

    let response = client
        .put(server.url("/api/menu/9"))
        .json(&json!({
            "name": "Paneer Tikka",
            "description": "Char-grilled cottage cheese",
            "price": 249.5,
            "category": "starters"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated: Value = response.json().await.unwrap();
    assert_eq!(updated["price"], 249.5);

    let response = client.delete(server.url("/api/menu/9")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = client.get(server.url("/api/menu/9")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"error": "Menu item not found"}));
}
