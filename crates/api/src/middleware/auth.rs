//! Caller identification.
//!
//! The caller names themselves in the `x-user-email` header. There is no
//! session and no signature; the header is trusted as long as it matches a
//! staff account.

use axum::{extract::FromRequestParts, http::request::Parts};
use tracing::Span;

use crate::error::AppError;
use crate::models::CurrentUser;
use crate::services::{AuthError, AuthService};
use crate::state::AppState;

/// Header carrying the caller's email.
pub const IDENTITY_HEADER: &str = "x-user-email";

/// Extractor that requires a known caller.
///
/// Rejects with 401 when the header is missing or names nobody.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(RequireUser(user): RequireUser) -> String {
///     format!("Hello, {}!", user.name)
/// }
/// ```
pub struct RequireUser(pub CurrentUser);

impl FromRequestParts<AppState> for RequireUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let identity = parts
            .headers
            .get(IDENTITY_HEADER)
            .map(|value| value.to_str().map_err(|_| AuthError::UnknownIdentity))
            .transpose()?;

        let user = AuthService::new(state.users()).resolve(identity)?;

        Span::current().record("user_id", user.id.as_i32());
        set_sentry_user(&user);

        Ok(Self(user))
    }
}

/// Set the Sentry user context for the rest of the request.
fn set_sentry_user(user: &CurrentUser) {
    sentry::configure_scope(|scope| {
        scope.set_user(Some(sentry::User {
            id: Some(user.id.to_string()),
            email: Some(user.email.to_string()),
            ..Default::default()
        }));
    });
}
