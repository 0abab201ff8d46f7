//! HTTP request handlers.
//!
//! Every handler except login resolves its `session_id` path segment through the session
//! registry first, so an unknown session yields 401 before any other validation runs.

pub mod guild;
pub mod message;
pub mod profile;
pub mod session;

#[cfg(test)]
mod test;

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header, HeaderMap},
    Json,
};
use serde::de::DeserializeOwned;
use std::convert::Infallible;

use crate::server::error::AppError;

/// Optional JSON request body.
///
/// A missing body, an empty body, or a body sent without a JSON content type is read as the
/// default value, so required-field checks on it produce the usual 400 messages. A JSON body
/// that fails to parse or does not match `T` is a 400 Bad Request.
///
/// Extraction never rejects; the outcome is held until `into_inner` so handlers can resolve
/// the session before reporting a bad body.
pub struct JsonBody<T>(Result<T, AppError>);

impl<T> JsonBody<T> {
    pub fn into_inner(self) -> Result<T, AppError> {
        self.0
    }
}

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Default + Send,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = has_json_content_type(req.headers());

        let bytes = match Bytes::from_request(req, state).await {
            Ok(bytes) => bytes,
            Err(rejection) => {
                return Ok(Self(Err(AppError::BadRequest(rejection.body_text()))));
            }
        };

        if !is_json || bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(Ok(T::default())));
        }

        let body = Json::<T>::from_bytes(&bytes)
            .map(|Json(value)| value)
            .map_err(|rejection| {
                tracing::debug!("Rejected request body: {}", rejection.body_text());
                AppError::BadRequest(format!("Invalid request body: {}", rejection.body_text()))
            });

        Ok(Self(body))
    }
}

/// Accepts `application/json` and `application/*+json`, with or without parameters.
fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };

    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}
