//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET    /                     - Liveness banner
//! GET    /health               - Health check
//!
//! # Auth (no identity header needed)
//! POST   /api/login            - Check email/password, return the user
//!
//! # Catalog (no identity header needed)
//! GET    /api/formats          - Release formats
//! GET    /api/genres           - Genres
//!
//! # Records (x-user-email required)
//! GET    /api/records          - List records        (clerk, manager, admin)
//! GET    /api/records/{id}     - Get one record      (clerk, manager, admin)
//! POST   /api/records          - Create a record     (clerk, manager, admin)
//! PUT    /api/records/{id}     - Replace a record    (manager, admin)
//! DELETE /api/records/{id}     - Delete a record     (admin)
//! ```

pub mod auth;
pub mod catalog;
pub mod health;
pub mod records;

use axum::Router;

use crate::state::AppState;

/// Build the complete router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(auth::router())
        .merge(catalog::router())
        .merge(records::router())
}
