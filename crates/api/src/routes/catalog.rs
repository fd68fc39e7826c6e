//! Dropdown choices for the record form.

use axum::{Json, Router, routing::get};

use crate::state::AppState;
use crate::store::catalog::{FORMATS, GENRES};

/// Build the catalog router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/formats", get(formats))
        .route("/api/genres", get(genres))
}

pub async fn formats() -> Json<&'static [&'static str]> {
    Json(FORMATS)
}

pub async fn genres() -> Json<&'static [&'static str]> {
    Json(GENRES)
}
