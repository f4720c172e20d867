//! Cross-origin policy for browser callers.
//!
//! Only the origins configured for the current [`Environment`] are echoed back
//! in `Access-Control-Allow-Origin`. Requests from any other origin are still
//! served, but without CORS headers, so the browser refuses to expose the
//! response to the calling page.

use axum::http::{
    Method,
    header::{AUTHORIZATION, CONTENT_TYPE},
};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::config::Environment;

/// Methods browsers may use cross-origin.
pub const ALLOWED_METHODS: [Method; 5] = [
    Method::GET,
    Method::POST,
    Method::PUT,
    Method::DELETE,
    Method::OPTIONS,
];

/// Build the CORS layer for an environment.
///
/// Credentials are allowed, so origins are always an explicit list.
#[must_use]
pub fn cors_layer(environment: Environment) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(environment.allowed_origin_headers()))
        .allow_methods(ALLOWED_METHODS)
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
}
