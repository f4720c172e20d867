//! Router assembly.
//!
//! `main` wraps this router in the Sentry layers; tests use it as-is.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
    middleware,
    response::IntoResponse,
};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::config::Environment;
use crate::error::ErrorBody;
use crate::middleware::{cors_layer, handle_panic, request_id_middleware};
use crate::routes;
use crate::state::AppState;

/// Build the full application router with its middleware stack.
pub fn router(state: AppState) -> Router {
    let environment = state.config().environment;
    let routes = Router::new()
        .merge(routes::routes())
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .with_state(state);
    with_middleware(routes, environment)
}

/// Wrap `routes` in the shared middleware stack.
///
/// CORS is outermost so that every response, including a caught panic,
/// carries the allowed origin.
fn with_middleware(routes: Router, environment: Environment) -> Router {
    routes
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                tracing::info_span!(
                    "request",
                    method = %request.method(),
                    path = %request.uri().path(),
                    request_id = tracing::field::Empty,
                )
            }),
        )
        .layer(cors_layer(environment))
}

async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        axum::Json(ErrorBody::new("Not found")),
    )
}

async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        axum::Json(ErrorBody::new("Method not allowed")),
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::http::{Method, header};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::*;
    use crate::catalog::MenuCatalog;
    use crate::config::StorefrontConfig;
    use crate::middleware::REQUEST_ID_HEADER;

    fn app() -> Router {
        let config = StorefrontConfig::from_lookup(|_| None).unwrap();
        router(AppState::new(config, MenuCatalog::seeded().unwrap()))
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, header::HeaderMap, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };
        (status, headers, body)
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn json_request(method: Method, uri: &str, body: &Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_api_test_route() {
        let request = Request::builder()
            .uri("/api/test")
            .header(header::ORIGIN, "http://localhost:5173")
            .body(Body::empty())
            .unwrap();
        let (status, headers, body) = send(app(), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"message": "API is working!"}));
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "http://localhost:5173"
        );
        assert!(headers.contains_key(REQUEST_ID_HEADER));
    }

    #[tokio::test]
    async fn test_api_test_route_disallowed_origin() {
        let request = Request::builder()
            .uri("/api/test")
            .header(header::ORIGIN, "https://evil.example")
            .body(Body::empty())
            .unwrap();
        let (_, headers, _) = send(app(), request).await;
        assert!(!headers.contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    }

    #[tokio::test]
    async fn test_health() {
        let (status, _, body) = send(app(), get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, Value::String("ok".to_string()));
    }

    #[tokio::test]
    async fn test_unknown_route_is_json_404() {
        let (status, _, body) = send(app(), get("/api/nope")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "Not found"}));
    }

    #[tokio::test]
    async fn test_wrong_method_is_json_405() {
        let request = Request::builder()
            .method(Method::PATCH)
            .uri("/api/menu/1")
            .body(Body::empty())
            .unwrap();
        let (status, _, body) = send(app(), request).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body, json!({"error": "Method not allowed"}));
    }

    #[tokio::test]
    async fn test_malformed_menu_params_are_json_400() {
        for uri in ["/api/menu/abc", "/api/menu/99999999999", "/api/menu/?skip=-1"] {
            let (status, _, body) = send(app(), get(uri)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
            let message = body["error"].as_str().unwrap();
            assert!(message.starts_with("Bad request: "), "{uri}: {message}");
        }

        let delete = Request::builder()
            .method(Method::DELETE)
            .uri("/api/menu/abc")
            .body(Body::empty())
            .unwrap();
        let (status, _, body) = send(app(), delete).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[allow(clippy::panic)]
    async fn explode() -> &'static str {
        panic!("handler exploded")
    }

    #[tokio::test]
    async fn test_panic_response_keeps_cors_and_request_id() {
        let routes = Router::new().route("/explode", axum::routing::get(explode));
        let request = Request::builder()
            .uri("/explode")
            .header(header::ORIGIN, "http://localhost:5173")
            .body(Body::empty())
            .unwrap();
        let (status, headers, body) =
            send(with_middleware(routes, Environment::Development), request).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error": "Something went wrong!"}));
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "http://localhost:5173"
        );
        assert!(headers.contains_key(REQUEST_ID_HEADER));
    }

    #[tokio::test]
    async fn test_menu_list_is_uncacheable() {
        let (status, headers, body) = send(app(), get("/api/menu/")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 8);
        assert_eq!(
            headers.get(header::CACHE_CONTROL).unwrap(),
            "no-cache, no-store, must-revalidate"
        );
        assert_eq!(headers.get(header::PRAGMA).unwrap(), "no-cache");
        assert_eq!(headers.get(header::EXPIRES).unwrap(), "0");
    }

    #[tokio::test]
    async fn test_menu_list_pagination() {
        let (_, _, body) = send(app(), get("/api/menu/?skip=6&limit=5")).await;
        let ids: Vec<_> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|item| item["id"].as_i64().unwrap())
            .collect();
        assert_eq!(ids, vec![7, 8]);
    }

    #[tokio::test]
    async fn test_menu_item_detail_and_missing() {
        let (status, _, body) = send(app(), get("/api/menu/6")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Mojito");
        assert_eq!(body["price"], 149);

        let (status, _, body) = send(app(), get("/api/menu/999")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "Menu item not found"}));
    }

    #[tokio::test]
    async fn test_menu_create_update_delete() {
        let app = app();
        let dish = json!({
            "name": "Paneer Tikka",
            "description": "Chargrilled cottage cheese",
            "price": 229,
            "category": "starters"
        });

        let (status, _, created) =
            send(app.clone(), json_request(Method::POST, "/api/menu/", &dish)).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["id"], 9);
        assert_eq!(created["popular"], false);

        let mut changed = dish.clone();
        changed["price"] = json!(249);
        let (status, _, updated) =
            send(app.clone(), json_request(Method::PUT, "/api/menu/9", &changed)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["price"], 249);

        let delete = Request::builder()
            .method(Method::DELETE)
            .uri("/api/menu/9")
            .body(Body::empty())
            .unwrap();
        let (status, _, _) = send(app.clone(), delete).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _, _) = send(app, get("/api/menu/9")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_menu_create_rejects_bad_payloads() {
        let missing_fields = json!({"name": "Nothing else"});
        let (status, _, body) =
            send(app(), json_request(Method::POST, "/api/menu/", &missing_fields)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());

        let negative = json!({
            "name": "Refund Soup",
            "description": "",
            "price": -1,
            "category": "soup"
        });
        let (status, _, body) =
            send(app(), json_request(Method::POST, "/api/menu/", &negative)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "invalid menu item: price cannot be negative");
    }
}
