use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        profile::{AvatarDto, NicknameDto, StatusDto, UsernameDto},
    },
    server::{
        controller::JsonBody,
        error::AppError,
        model::profile::{AvatarParam, NicknameParam, PresenceParam, UsernameParam},
        service::profile::ProfileService,
        state::AppState,
        util::parse::parse_guild_id,
    },
};

/// Tag for grouping profile endpoints in OpenAPI documentation
pub static PROFILE_TAG: &str = "profile";

/// Update the bot's presence.
///
/// # Arguments
/// - `state` - Application state containing the session registry
/// - `session_id` - Session returned by login
/// - `body` - Status and optional activity
///
/// # Returns
/// - `200 OK` - Presence updated
/// - `400 Bad Request` - Unknown status or malformed activity
/// - `401 Unauthorized` - Session expired
/// - `500 Internal Server Error` - Gateway rejected the update
#[utoipa::path(
    post,
    path = "/api/status/{session_id}",
    tag = PROFILE_TAG,
    params(
        ("session_id" = String, Path, description = "Session id returned by login")
    ),
    request_body = StatusDto,
    responses(
        (status = 200, description = "Presence updated", body = SuccessDto),
        (status = 400, description = "Invalid status or activity", body = ErrorDto),
        (status = 401, description = "Session expired", body = ErrorDto),
        (status = 500, description = "Gateway rejected the update", body = ErrorDto)
    ),
)]
pub async fn set_status(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    body: JsonBody<StatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let connection = state.sessions.lookup(&session_id).await?;
    let param = PresenceParam::try_from(body.into_inner()?)?;

    ProfileService::new(connection.as_ref())
        .set_presence(param)
        .await?;

    Ok(Json(SuccessDto::ok()))
}

/// Set or reset the bot's nickname in a guild.
///
/// An empty or omitted nickname resets it to the username.
///
/// # Arguments
/// - `state` - Application state containing the session registry
/// - `session_id` - Session returned by login
/// - `guild_id` - Discord guild ID
/// - `body` - New nickname
///
/// # Returns
/// - `200 OK` - Nickname updated
/// - `400 Bad Request` - Invalid guild id
/// - `401 Unauthorized` - Session expired
/// - `500 Internal Server Error` - Discord rejected the request
#[utoipa::path(
    post,
    path = "/api/nickname/{session_id}/{guild_id}",
    tag = PROFILE_TAG,
    params(
        ("session_id" = String, Path, description = "Session id returned by login"),
        ("guild_id" = String, Path, description = "Discord guild ID")
    ),
    request_body = NicknameDto,
    responses(
        (status = 200, description = "Nickname updated", body = SuccessDto),
        (status = 400, description = "Invalid guild id", body = ErrorDto),
        (status = 401, description = "Session expired", body = ErrorDto),
        (status = 500, description = "Discord rejected the request", body = ErrorDto)
    ),
)]
pub async fn set_nickname(
    State(state): State<AppState>,
    Path((session_id, guild_id)): Path<(String, String)>,
    body: JsonBody<NicknameDto>,
) -> Result<impl IntoResponse, AppError> {
    let connection = state.sessions.lookup(&session_id).await?;
    let guild_id = parse_guild_id(&guild_id)?;
    let param = NicknameParam::from(body.into_inner()?);

    ProfileService::new(connection.as_ref())
        .set_nickname(guild_id, param)
        .await?;

    Ok(Json(SuccessDto::ok()))
}

/// Replace the bot's avatar.
///
/// # Arguments
/// - `state` - Application state containing the session registry
/// - `session_id` - Session returned by login
/// - `body` - Image as raw base64 or a `data:` URI
///
/// # Returns
/// - `200 OK` - Avatar updated
/// - `400 Bad Request` - Image missing or not valid base64
/// - `401 Unauthorized` - Session expired
/// - `500 Internal Server Error` - Discord rejected the image
#[utoipa::path(
    post,
    path = "/api/avatar/{session_id}",
    tag = PROFILE_TAG,
    params(
        ("session_id" = String, Path, description = "Session id returned by login")
    ),
    request_body = AvatarDto,
    responses(
        (status = 200, description = "Avatar updated", body = SuccessDto),
        (status = 400, description = "Invalid avatar image", body = ErrorDto),
        (status = 401, description = "Session expired", body = ErrorDto),
        (status = 500, description = "Discord rejected the image", body = ErrorDto)
    ),
)]
pub async fn set_avatar(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    body: JsonBody<AvatarDto>,
) -> Result<impl IntoResponse, AppError> {
    let connection = state.sessions.lookup(&session_id).await?;
    let param = AvatarParam::try_from(body.into_inner()?)?;

    ProfileService::new(connection.as_ref())
        .set_avatar(param)
        .await?;

    Ok(Json(SuccessDto::ok()))
}

/// Change the bot's global username.
///
/// # Arguments
/// - `state` - Application state containing the session registry
/// - `session_id` - Session returned by login
/// - `body` - New username
///
/// # Returns
/// - `200 OK` - Username changed
/// - `400 Bad Request` - Username missing or blank
/// - `401 Unauthorized` - Session expired
/// - `500 Internal Server Error` - Discord rejected the change, e.g. rate limited
#[utoipa::path(
    post,
    path = "/api/username/{session_id}",
    tag = PROFILE_TAG,
    params(
        ("session_id" = String, Path, description = "Session id returned by login")
    ),
    request_body = UsernameDto,
    responses(
        (status = 200, description = "Username changed", body = SuccessDto),
        (status = 400, description = "Username required", body = ErrorDto),
        (status = 401, description = "Session expired", body = ErrorDto),
        (status = 500, description = "Discord rejected the change", body = ErrorDto)
    ),
)]
pub async fn set_username(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    body: JsonBody<UsernameDto>,
) -> Result<impl IntoResponse, AppError> {
    let connection = state.sessions.lookup(&session_id).await?;
    let param = UsernameParam::try_from(body.into_inner()?)?;

    ProfileService::new(connection.as_ref())
        .set_username(param)
        .await?;

    Ok(Json(SuccessDto::ok()))
}
