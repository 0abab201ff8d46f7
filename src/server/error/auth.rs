use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Discord rejected the bot token or the gateway could not be reached.
    ///
    /// The underlying reason is logged, the client only learns that login failed.
    /// Results in a 401 Unauthorized response.
    #[error("Invalid token or login failed")]
    LoginFailed,

    /// The session id is unknown, either never issued or already logged out.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Session expired")]
    SessionExpired,
}

/// Converts authentication errors into HTTP responses.
///
/// Both variants map to 401 Unauthorized with the variant's message as the error body.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
