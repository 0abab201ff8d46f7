use serenity::all::{ActivityData, ChannelType, OnlineStatus};
use serenity::async_trait;
use std::sync::Arc;

use crate::{
    error::ConnectionError,
    model::{BotUser, CachedGuild, GuildChannelInfo, InviteOptions, MessageInfo},
};

/// Creates authenticated bot connections from a bot token.
#[async_trait]
pub trait BotConnector: Send + Sync {
    /// Logs in with the provided bot token and waits until the connection is usable.
    ///
    /// # Arguments
    /// - `token` - Discord bot token supplied by the user
    ///
    /// # Returns
    /// - `Ok(Arc<dyn BotConnection>)` - Logged-in connection, exclusively owned by the caller
    /// - `Err(ConnectionError::LoginFailed)` - Token rejected or gateway closed during login
    /// - `Err(ConnectionError::ReadyTimeout)` - Gateway did not become ready in time
    async fn connect(&self, token: &str) -> Result<Arc<dyn BotConnection>, ConnectionError>;
}

/// A live, logged-in bot.
///
/// Ids passed to these methods are non-zero Discord snowflakes; callers validate user input
/// before reaching the connection.
#[async_trait]
pub trait BotConnection: Send + Sync {
    /// Discord user ID of the logged-in bot.
    fn user_id(&self) -> u64;

    /// Fetches the bot's own profile.
    async fn current_user(&self) -> Result<BotUser, ConnectionError>;

    /// Returns the guilds currently held in the local cache without contacting Discord.
    fn cached_guilds(&self) -> Vec<CachedGuild>;

    /// Fetches every channel of a guild along with the bot's permissions in each.
    async fn guild_channels(&self, guild_id: u64) -> Result<Vec<GuildChannelInfo>, ConnectionError>;

    /// Creates an invite for a channel and returns the invite code.
    async fn create_invite(
        &self,
        channel_id: u64,
        options: InviteOptions,
    ) -> Result<String, ConnectionError>;

    /// Fetches the type of a channel.
    ///
    /// # Returns
    /// - `Ok(Some(ChannelType))` - Channel exists and is visible to the bot
    /// - `Ok(None)` - Channel does not exist
    /// - `Err(ConnectionError)` - Any other remote failure
    async fn channel_kind(&self, channel_id: u64) -> Result<Option<ChannelType>, ConnectionError>;

    /// Fetches up to `limit` of the most recent messages of a channel, in no guaranteed order.
    async fn recent_messages(
        &self,
        channel_id: u64,
        limit: u8,
    ) -> Result<Vec<MessageInfo>, ConnectionError>;

    /// Sends a text message and returns the new message's id.
    async fn send_message(&self, channel_id: u64, content: &str) -> Result<u64, ConnectionError>;

    /// Updates the bot's presence on the gateway.
    async fn set_presence(
        &self,
        status: OnlineStatus,
        activity: Option<ActivityData>,
    ) -> Result<(), ConnectionError>;

    /// Sets the bot's nickname in a guild, `None` resets it to the username.
    async fn set_nickname(&self, guild_id: u64, nickname: Option<&str>)
        -> Result<(), ConnectionError>;

    /// Replaces the bot's avatar with the provided image bytes.
    async fn set_avatar(&self, image: Vec<u8>) -> Result<(), ConnectionError>;

    /// Changes the bot's global username.
    async fn set_username(&self, username: &str) -> Result<(), ConnectionError>;

    /// Makes the bot leave a guild.
    async fn leave_guild(&self, guild_id: u64) -> Result<(), ConnectionError>;

    /// Closes the gateway connection. Safe to call more than once.
    async fn shutdown(&self);
}
