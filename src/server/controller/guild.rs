use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        discord::{ChannelsDto, GuildsDto},
    },
    server::{
        error::AppError,
        model::guild::{ChannelSummary, GuildSummary},
        service::guild::GuildService,
        state::AppState,
        util::parse::parse_guild_id,
    },
};

/// Tag for grouping guild endpoints in OpenAPI documentation
pub static GUILD_TAG: &str = "guild";

/// List the guilds the bot belongs to.
///
/// Reads the connection's guild cache, so guilds joined or left since login are reflected
/// without a remote call. No invites are minted.
///
/// # Arguments
/// - `state` - Application state containing the session registry
/// - `session_id` - Session returned by login
///
/// # Returns
/// - `200 OK` - Guilds of the bot
/// - `401 Unauthorized` - Session expired
#[utoipa::path(
    get,
    path = "/api/guilds/{session_id}",
    tag = GUILD_TAG,
    params(
        ("session_id" = String, Path, description = "Session id returned by login")
    ),
    responses(
        (status = 200, description = "Guilds of the bot", body = GuildsDto),
        (status = 401, description = "Session expired", body = ErrorDto)
    ),
)]
pub async fn get_guilds(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let connection = state.sessions.lookup(&session_id).await?;

    let guilds = GuildService::new(connection.as_ref()).cached();

    Ok(Json(GuildsDto {
        guilds: guilds.into_iter().map(GuildSummary::into_dto).collect(),
    }))
}

/// List the text channels of a guild in which the bot may send messages.
///
/// Channels and permissions are always fetched from Discord.
///
/// # Arguments
/// - `state` - Application state containing the session registry
/// - `session_id` - Session returned by login
/// - `guild_id` - Discord guild ID
///
/// # Returns
/// - `200 OK` - Sendable text channels
/// - `400 Bad Request` - Invalid guild id
/// - `401 Unauthorized` - Session expired
/// - `500 Internal Server Error` - Discord rejected the request
#[utoipa::path(
    get,
    path = "/api/channels/{session_id}/{guild_id}",
    tag = GUILD_TAG,
    params(
        ("session_id" = String, Path, description = "Session id returned by login"),
        ("guild_id" = String, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Sendable text channels", body = ChannelsDto),
        (status = 400, description = "Invalid guild id", body = ErrorDto),
        (status = 401, description = "Session expired", body = ErrorDto),
        (status = 500, description = "Discord rejected the request", body = ErrorDto)
    ),
)]
pub async fn get_channels(
    State(state): State<AppState>,
    Path((session_id, guild_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let connection = state.sessions.lookup(&session_id).await?;
    let guild_id = parse_guild_id(&guild_id)?;

    let channels = GuildService::new(connection.as_ref())
        .sendable_channels(guild_id)
        .await?;

    Ok(Json(ChannelsDto {
        channels: channels.into_iter().map(ChannelSummary::into_dto).collect(),
    }))
}

/// Make the bot leave a guild.
///
/// # Arguments
/// - `state` - Application state containing the session registry
/// - `session_id` - Session returned by login
/// - `guild_id` - Discord guild ID
///
/// # Returns
/// - `200 OK` - Bot left the guild
/// - `400 Bad Request` - Invalid guild id
/// - `401 Unauthorized` - Session expired
/// - `500 Internal Server Error` - Discord rejected the request
#[utoipa::path(
    post,
    path = "/api/leave/{session_id}/{guild_id}",
    tag = GUILD_TAG,
    params(
        ("session_id" = String, Path, description = "Session id returned by login"),
        ("guild_id" = String, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Left the guild", body = SuccessDto),
        (status = 400, description = "Invalid guild id", body = ErrorDto),
        (status = 401, description = "Session expired", body = ErrorDto),
        (status = 500, description = "Discord rejected the request", body = ErrorDto)
    ),
)]
pub async fn leave_guild(
    State(state): State<AppState>,
    Path((session_id, guild_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let connection = state.sessions.lookup(&session_id).await?;
    let guild_id = parse_guild_id(&guild_id)?;

    GuildService::new(connection.as_ref()).leave(guild_id).await?;

    Ok(Json(SuccessDto::ok()))
}
