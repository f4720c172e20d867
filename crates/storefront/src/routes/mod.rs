//! HTTP route handlers for the storefront API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Liveness check
//! GET  /api/test               - Connectivity check ({"message": "API is working!"})
//!
//! # Menu
//! GET    /api/menu/            - List menu items (?skip, ?limit)
//! POST   /api/menu/            - Create menu item
//! GET    /api/menu/{id}        - Menu item detail
//! PUT    /api/menu/{id}        - Replace menu item
//! DELETE /api/menu/{id}        - Delete menu item
//! ```

pub mod diagnostics;
pub mod menu;

use axum::{
    Router,
    http::{
        HeaderName, HeaderValue,
        header::{CACHE_CONTROL, EXPIRES, PRAGMA},
    },
    routing::get,
};
use tower::ServiceBuilder;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::state::AppState;

fn no_cache(name: HeaderName, value: &'static str) -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(name, HeaderValue::from_static(value))
}

/// Create the menu API router.
pub fn menu_routes() -> Router<AppState> {
    Router::new()
        .route("/api/menu/", get(menu::list).post(menu::create))
        .route("/api/menu", get(menu::list).post(menu::create))
        .route(
            "/api/menu/{id}",
            get(menu::show).put(menu::update).delete(menu::delete),
        )
        .layer(
            ServiceBuilder::new()
                .layer(no_cache(CACHE_CONTROL, "no-cache, no-store, must-revalidate"))
                .layer(no_cache(PRAGMA, "no-cache"))
                .layer(no_cache(EXPIRES, "0")),
        )
}

/// Create all routes for the storefront API.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(diagnostics::health))
        .route("/api/test", get(diagnostics::api_test))
        .merge(menu_routes())
}
