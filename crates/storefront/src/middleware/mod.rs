//! HTTP middleware stack for the storefront API.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (added in `main`, capture errors and transactions)
//! 2. `CatchPanicLayer` (turn handler panics into the generic 500 body)
//! 3. `TraceLayer` (request span with method, path and request id)
//! 4. Request ID (add unique ID to each request)
//! 5. CORS (origin list chosen by environment)

pub mod cors;
pub mod panic;
pub mod request_id;

pub use cors::cors_layer;
pub use panic::handle_panic;
pub use request_id::{REQUEST_ID_HEADER, request_id_middleware};
