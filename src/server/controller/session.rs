use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        session::{LoginDto, LoginResponseDto},
    },
    server::{controller::JsonBody, error::AppError, state::AppState},
};

/// Tag for grouping session endpoints in OpenAPI documentation
pub static SESSION_TAG: &str = "session";

/// Log a bot in and open a session.
///
/// Connects to the Discord gateway with the provided bot token, waits for the connection to
/// become ready, and returns a new session id along with the bot's profile and every guild it
/// belongs to. A one-day invite is minted for each guild where the bot may create one.
///
/// # Arguments
/// - `state` - Application state containing the session registry
/// - `body` - Login payload containing the bot token
///
/// # Returns
/// - `200 OK` - Session id, bot profile and guilds
/// - `400 Bad Request` - Token missing or blank
/// - `401 Unauthorized` - Token rejected or the gateway handshake failed
#[utoipa::path(
    post,
    path = "/api/login",
    tag = SESSION_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = LoginResponseDto),
        (status = 400, description = "Token required", body = ErrorDto),
        (status = 401, description = "Invalid token or login failed", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    body: JsonBody<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let payload = body.into_inner()?;

    let token = match payload.token.as_deref().map(str::trim) {
        Some(token) if !token.is_empty() => token,
        _ => return Err(AppError::BadRequest("Token required".to_string())),
    };

    let result = state.sessions.create(token).await?;

    Ok(Json(result.into_dto()))
}

/// Log a bot out and close its session.
///
/// Always succeeds, including for unknown or already closed sessions.
///
/// # Arguments
/// - `state` - Application state containing the session registry
/// - `session_id` - Session to close
///
/// # Returns
/// - `200 OK` - Session closed or did not exist
#[utoipa::path(
    post,
    path = "/api/logout/{session_id}",
    tag = SESSION_TAG,
    params(
        ("session_id" = String, Path, description = "Session id returned by login")
    ),
    responses(
        (status = 200, description = "Logged out", body = SuccessDto)
    ),
)]
pub async fn logout(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> impl IntoResponse {
    state.sessions.destroy(&session_id).await;

    Json(SuccessDto::ok())
}
