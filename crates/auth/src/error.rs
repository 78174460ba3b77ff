//! Authentication errors

use axum::response::{IntoResponse, Response};
use jobly_common::Error;

/// Authentication error
///
/// Rendered through `jobly_common::Error`, so every variant answers 401 with
/// the shared error body. A valid token without the admin claim is reported
/// as `Error::Authorization`; everything else is `Error::Authentication`.
#[derive(Debug, PartialEq, Eq)]
pub enum AuthError {
    MissingAuthorization,
    InvalidAuthorizationFormat,
    InvalidToken,
    AdminRequired,
}

impl AuthError {
    fn message(&self) -> &'static str {
        match self {
            AuthError::MissingAuthorization => "Authorization header required",
            AuthError::InvalidAuthorizationFormat => "Invalid authorization header format",
            AuthError::InvalidToken => "Invalid or expired token",
            AuthError::AdminRequired => "Admin privileges required",
        }
    }
}

impl From<AuthError> for Error {
    fn from(err: AuthError) -> Self {
        let message = err.message().to_string();
        match err {
            AuthError::AdminRequired => Error::Authorization(message),
            _ => Error::Authentication(message),
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        Error::from(self).into_response()
    }
}
