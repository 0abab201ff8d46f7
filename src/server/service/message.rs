use connection::BotConnection;
use serenity::all::ChannelType;

use crate::server::{
    error::AppError,
    model::message::{MessageSummary, SendMessageParam},
};

/// Maximum number of messages returned by a listing.
pub const MESSAGE_FETCH_LIMIT: u8 = 50;

pub struct MessageService<'a> {
    connection: &'a dyn BotConnection,
}

impl<'a> MessageService<'a> {
    pub fn new(connection: &'a dyn BotConnection) -> Self {
        Self { connection }
    }

    /// Fetches the most recent messages of a text channel, oldest first.
    ///
    /// # Returns
    /// - `Ok(Vec<MessageSummary>)` - At most 50 messages ordered by ascending timestamp
    /// - `Err(AppError::InvalidChannel)` - Channel missing or not a guild text channel
    /// - `Err(AppError::ConnectionErr)` - Remote failure
    pub async fn recent(&self, channel_id: u64) -> Result<Vec<MessageSummary>, AppError> {
        self.require_text_channel(channel_id).await?;

        let mut messages: Vec<MessageSummary> = self
            .connection
            .recent_messages(channel_id, MESSAGE_FETCH_LIMIT)
            .await?
            .into_iter()
            .map(MessageSummary::from_info)
            .collect();

        messages.sort_by_key(|message| (message.timestamp, message.id));

        let excess = messages
            .len()
            .saturating_sub(MESSAGE_FETCH_LIMIT as usize);
        messages.drain(..excess);

        Ok(messages)
    }

    /// Sends a message to a text channel.
    ///
    /// # Returns
    /// - `Ok(u64)` - Id of the sent message
    /// - `Err(AppError::InvalidChannel)` - Channel missing or not a guild text channel
    /// - `Err(AppError::ConnectionErr)` - Remote failure, e.g. missing permissions
    pub async fn send(&self, channel_id: u64, param: SendMessageParam) -> Result<u64, AppError> {
        self.require_text_channel(channel_id).await?;

        let message_id = self
            .connection
            .send_message(channel_id, &param.content)
            .await?;

        tracing::debug!(
            "Bot {} sent message {} to channel {}",
            self.connection.user_id(),
            message_id,
            channel_id
        );

        Ok(message_id)
    }

    async fn require_text_channel(&self, channel_id: u64) -> Result<(), AppError> {
        match self.connection.channel_kind(channel_id).await? {
            Some(ChannelType::Text) => Ok(()),
            _ => Err(AppError::InvalidChannel),
        }
    }
}
