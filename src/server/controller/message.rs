use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        discord::{MessagesDto, SendMessageDto, SentMessageDto},
    },
    server::{
        controller::JsonBody,
        error::AppError,
        model::message::{MessageSummary, SendMessageParam},
        service::message::MessageService,
        state::AppState,
        util::parse::parse_channel_id,
    },
};

/// Tag for grouping message endpoints in OpenAPI documentation
pub static MESSAGE_TAG: &str = "message";

/// Get the most recent messages of a text channel.
///
/// Returns at most 50 messages, oldest first. Messages are always fetched from Discord.
///
/// # Arguments
/// - `state` - Application state containing the session registry
/// - `session_id` - Session returned by login
/// - `channel_id` - Discord channel ID
///
/// # Returns
/// - `200 OK` - Recent messages in ascending timestamp order
/// - `400 Bad Request` - Channel missing or not a guild text channel
/// - `401 Unauthorized` - Session expired
/// - `500 Internal Server Error` - Discord rejected the request
#[utoipa::path(
    get,
    path = "/api/messages/{session_id}/{channel_id}",
    tag = MESSAGE_TAG,
    params(
        ("session_id" = String, Path, description = "Session id returned by login"),
        ("channel_id" = String, Path, description = "Discord channel ID")
    ),
    responses(
        (status = 200, description = "Recent messages", body = MessagesDto),
        (status = 400, description = "Invalid channel", body = ErrorDto),
        (status = 401, description = "Session expired", body = ErrorDto),
        (status = 500, description = "Discord rejected the request", body = ErrorDto)
    ),
)]
pub async fn get_messages(
    State(state): State<AppState>,
    Path((session_id, channel_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let connection = state.sessions.lookup(&session_id).await?;
    let channel_id = parse_channel_id(&channel_id)?;

    let messages = MessageService::new(connection.as_ref())
        .recent(channel_id)
        .await?;

    Ok(Json(MessagesDto {
        messages: messages.into_iter().map(MessageSummary::into_dto).collect(),
    }))
}

/// Send a message to a text channel.
///
/// Blank content is rejected before anything is sent.
///
/// # Arguments
/// - `state` - Application state containing the session registry
/// - `session_id` - Session returned by login
/// - `channel_id` - Discord channel ID
/// - `body` - Message content
///
/// # Returns
/// - `200 OK` - Message sent, with its id
/// - `400 Bad Request` - Content missing, or channel missing or not a guild text channel
/// - `401 Unauthorized` - Session expired
/// - `500 Internal Server Error` - Discord rejected the request
#[utoipa::path(
    post,
    path = "/api/messages/{session_id}/{channel_id}",
    tag = MESSAGE_TAG,
    params(
        ("session_id" = String, Path, description = "Session id returned by login"),
        ("channel_id" = String, Path, description = "Discord channel ID")
    ),
    request_body = SendMessageDto,
    responses(
        (status = 200, description = "Message sent", body = SentMessageDto),
        (status = 400, description = "Message content required or invalid channel", body = ErrorDto),
        (status = 401, description = "Session expired", body = ErrorDto),
        (status = 500, description = "Discord rejected the request", body = ErrorDto)
    ),
)]
pub async fn send_message(
    State(state): State<AppState>,
    Path((session_id, channel_id)): Path<(String, String)>,
    body: JsonBody<SendMessageDto>,
) -> Result<impl IntoResponse, AppError> {
    let connection = state.sessions.lookup(&session_id).await?;
    let param = SendMessageParam::try_from(body.into_inner()?)?;
    let channel_id = parse_channel_id(&channel_id)?;

    let message_id = MessageService::new(connection.as_ref())
        .send(channel_id, param)
        .await?;

    Ok(Json(SentMessageDto {
        success: true,
        message_id,
    }))
}
