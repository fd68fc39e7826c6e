//! Authentication error types.

use thiserror::Error;

/// Errors that can occur while identifying the caller.
///
/// The display strings are shown to clients as-is.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// No identity header on the request.
    #[error("Authentication required. Please provide x-user-email header.")]
    MissingIdentity,

    /// The identity header names nobody in the directory.
    #[error("Invalid user credentials.")]
    UnknownIdentity,

    /// Login email/password pair did not match.
    #[error("Invalid email or password.")]
    InvalidCredentials,
}
