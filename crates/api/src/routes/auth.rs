//! Login handler.

use axum::{Json, Router, extract::State, routing::post};
use serde::Deserialize;
use validator::Validate;

use crate::{
    error::AppError, extract::ValidatedJson, models::CurrentUser, services::AuthService,
    state::AppState,
};

/// Build the auth router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/login", post(login))
}

/// Request for logging in.
///
/// Missing fields default to empty strings, which simply fail to match.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(length(max = 254))]
    pub email: String,
    #[serde(default)]
    #[validate(length(max = 128))]
    pub password: String,
}

/// Check an email/password pair and return the matching user.
///
/// The client then sends that email in `x-user-email` on every call.
///
/// # Errors
///
/// Returns 401 if the credentials do not match.
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<LoginRequest>,
) -> Result<Json<CurrentUser>, AppError> {
    let user = AuthService::new(state.users()).login(&body.email, &body.password)?;
    Ok(Json(user))
}
