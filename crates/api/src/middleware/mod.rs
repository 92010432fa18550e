//! HTTP middleware stack for the API.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (added in `main`, capture errors)
//! 2. `CorsLayer` (any origin, method, and header)
//! 3. `TraceLayer` (request span with method, uri, status, latency)
//! 4. Request ID (add unique ID to each request and span)

pub mod request_id;

pub use request_id::{REQUEST_ID_HEADER, request_id_middleware};
