//! HTTP middleware and extractors.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (added by the binary)
//! 2. CORS (permissive)
//! 3. `TraceLayer` (one `http_request` span per request)
//! 4. Request ID (recorded in the span, echoed in the response)
//! 5. Panic catcher (turns a handler panic into a JSON 500)
//!
//! Authentication is an extractor, not a layer: handlers that need a caller
//! take [`RequireUser`].

pub mod auth;
pub mod request_id;

pub use auth::{IDENTITY_HEADER, RequireUser};
pub use request_id::{REQUEST_ID_HEADER, request_id_middleware};
