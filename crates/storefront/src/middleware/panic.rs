//! Catch-all handling for handler panics.
//!
//! Used with `tower_http::catch_panic::CatchPanicLayer::custom`. The panic is
//! logged with its message; the panic site and its stack are reported by the
//! Sentry panic hook installed in `main`. The caller only ever sees the
//! generic 500 body.

use std::any::Any;

use axum::response::Response;

use crate::error::internal_error_response;

/// Convert a caught panic payload into the generic 500 response.
#[allow(clippy::needless_pass_by_value)] // signature required by CatchPanicLayer
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let message = panic_message(payload.as_ref());
    tracing::error!(panic = %message, "Unhandled error while serving request");

    internal_error_response()
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown panic")
}
