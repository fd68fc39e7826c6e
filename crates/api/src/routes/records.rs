//! Inventory record handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use serde::Serialize;

use record_shop_core::{Permission, RecordId};

use crate::{
    error::{AppError, RECORD_NOT_FOUND},
    extract::JsonBody,
    middleware::RequireUser,
    models::{Record, RecordPayload},
    services::InventoryService,
    state::AppState,
};

/// Build the records router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/records", get(index).post(create))
        .route("/api/records/{id}", get(show).put(update).delete(destroy))
}

// =============================================================================
// Response Types
// =============================================================================

/// Response for a successful delete.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: &'static str,
    pub record: Record,
}

// =============================================================================
// Handlers
// =============================================================================

/// List all records.
///
/// # Errors
///
/// Returns 401 without a known caller.
pub async fn index(
    RequireUser(user): RequireUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<Record>>, AppError> {
    let records = InventoryService::new(state.records()).list(&user)?;
    Ok(Json(records))
}

/// Get a single record.
///
/// # Errors
///
/// Returns 401 without a known caller, 404 if the record does not exist.
pub async fn show(
    RequireUser(user): RequireUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Record>, AppError> {
    InventoryService::authorize(&user, Permission::View)?;
    let id = parse_id(&id)?;
    let record = InventoryService::new(state.records()).get(&user, id)?;
    Ok(Json(record))
}

/// Create a record.
///
/// # Errors
///
/// Returns 400 for an invalid body, 401 without a known caller, 403 if the
/// caller may not add records.
pub async fn create(
    RequireUser(user): RequireUser,
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<RecordPayload>,
) -> Result<(StatusCode, Json<Record>), AppError> {
    let record = InventoryService::new(state.records()).create(&user, payload)?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// Replace every field of a record except its ID.
///
/// # Errors
///
/// Returns 400 for an invalid body, 401 without a known caller, 403 if the
/// caller may not update records, 404 if the record does not exist.
pub async fn update(
    RequireUser(user): RequireUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<RecordPayload>,
) -> Result<Json<Record>, AppError> {
    InventoryService::authorize(&user, Permission::Update)?;
    let id = parse_id(&id)?;
    let record = InventoryService::new(state.records()).update(&user, id, payload)?;
    Ok(Json(record))
}

/// Delete a record and return it.
///
/// # Errors
///
/// Returns 401 without a known caller, 403 if the caller may not delete
/// records, 404 if the record does not exist.
pub async fn destroy(
    RequireUser(user): RequireUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, AppError> {
    InventoryService::authorize(&user, Permission::Delete)?;
    let id = parse_id(&id)?;
    let record = InventoryService::new(state.records()).delete(&user, id)?;
    Ok(Json(DeleteResponse {
        message: "Record deleted.",
        record,
    }))
}

/// A path segment that is not a number can never name a record.
///
/// Only called once the caller's permission has been checked.
fn parse_id(raw: &str) -> Result<RecordId, AppError> {
    raw.parse()
        .map_err(|_| AppError::NotFound(RECORD_NOT_FOUND.to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::{
        body::{Body, to_bytes},
        http::{Request, Response},
    };
    use tower::ServiceExt;

    use super::*;
    use crate::{app, config::ApiConfig, middleware::IDENTITY_HEADER};

    fn state() -> AppState {
        AppState::new(ApiConfig::default()).unwrap()
    }

    async fn send(
        state: &AppState,
        method: &str,
        uri: &str,
        user: Option<&str>,
        body: Option<serde_json::Value>,
    ) -> Response<Body> {
        let mut request = Request::builder().method(method).uri(uri);
        if let Some(email) = user {
            request = request.header(IDENTITY_HEADER, email);
        }
        let request = match body {
            Some(json) => request
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => request.body(Body::empty()).unwrap(),
        };
        app(state.clone()).oneshot(request).await.unwrap()
    }

    async fn json(response: Response<Body>) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn new_record() -> serde_json::Value {
        serde_json::json!({
            "title": "In Rainbows",
            "artist": "Radiohead",
            "format": "Vinyl",
            "genre": "Alternative",
            "releaseYear": 2007,
            "price": 31.99,
            "stockQty": 7,
        })
    }

    #[tokio::test]
    async fn test_list_requires_identity() {
        let state = state();
        let response = send(&state, "GET", "/api/records", None, None).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            json(response).await["message"],
            "Authentication required. Please provide x-user-email header."
        );

        let response = send(
            &state,
            "GET",
            "/api/records",
            Some("ghost@recordshop.com"),
            None,
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(json(response).await["message"], "Invalid user credentials.");
    }

    #[tokio::test]
    async fn test_list_seeded() {
        let state = state();
        let response = send(
            &state,
            "GET",
            "/api/records",
            Some("clerk@recordshop.com"),
            None,
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let records = json(response).await;
        assert_eq!(records.as_array().unwrap().len(), 6);
        assert_eq!(records[0]["title"], "Californication");
        assert_eq!(records[0]["price"], 29.99);
    }

    #[tokio::test]
    async fn test_show_non_numeric_id_is_not_found() {
        let state = state();
        let response = send(
            &state,
            "GET",
            "/api/records/abc",
            Some("clerk@recordshop.com"),
            None,
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(json(response).await["message"], "Record not found.");
    }

    #[tokio::test]
    async fn test_clerk_change_on_non_numeric_id_is_forbidden() {
        let state = state();
        let response = send(
            &state,
            "PUT",
            "/api/records/abc",
            Some("clerk@recordshop.com"),
            Some(new_record()),
        )
        .await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let response = send(
            &state,
            "DELETE",
            "/api/records/abc",
            Some("clerk@recordshop.com"),
            None,
        )
        .await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_admin_delete_non_numeric_id_is_not_found() {
        let state = state();
        let response = send(
            &state,
            "DELETE",
            "/api/records/abc",
            Some("admin@recordshop.com"),
            None,
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(json(response).await["message"], "Record not found.");
    }

    #[tokio::test]
    async fn test_create_blank_title_is_bad_request() {
        let state = state();
        let mut body = new_record();
        body["title"] = serde_json::json!("   ");

        let response = send(
            &state,
            "POST",
            "/api/records",
            Some("clerk@recordshop.com"),
            Some(body),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json(response).await["errors"]["title"][0], "title is required");
        assert_eq!(state.records().list().len(), 6);
    }

    #[tokio::test]
    async fn test_create_returns_201_with_next_id() {
        let state = state();
        let response = send(
            &state,
            "POST",
            "/api/records",
            Some("clerk@recordshop.com"),
            Some(new_record()),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let record = json(response).await;
        assert_eq!(record["id"], 7);
        assert_eq!(record["customerId"], "");
    }

    #[tokio::test]
    async fn test_create_malformed_json_is_bad_request() {
        let state = state();
        let request = Request::post("/api/records")
            .header(IDENTITY_HEADER, "admin@recordshop.com")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let response = app(state).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(json(response).await["message"].is_string());
    }

    #[tokio::test]
    async fn test_clerk_delete_is_forbidden() {
        let state = state();
        let response = send(
            &state,
            "DELETE",
            "/api/records/1",
            Some("clerk@recordshop.com"),
            None,
        )
        .await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(state.records().list().len(), 6);
    }

    #[tokio::test]
    async fn test_admin_delete_returns_record() {
        let state = state();
        let response = send(
            &state,
            "DELETE",
            "/api/records/2",
            Some("admin@recordshop.com"),
            None,
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json(response).await;
        assert_eq!(body["message"], "Record deleted.");
        assert_eq!(body["record"]["title"], "Black Summer");
    }

    #[tokio::test]
    async fn test_update_ignores_body_id() {
        let state = state();
        let mut body = new_record();
        body["id"] = serde_json::json!(42);

        let response = send(
            &state,
            "PUT",
            "/api/records/3",
            Some("manager@recordshop.com"),
            Some(body),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let record = json(response).await;
        assert_eq!(record["id"], 3);
        assert_eq!(record["title"], "In Rainbows");
    }
}
