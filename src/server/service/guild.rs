use connection::{model::InviteOptions, BotConnection};
use futures_util::future::join_all;
use serenity::all::{ChannelType, Permissions};

use crate::server::{
    error::AppError,
    model::guild::{ChannelSummary, GuildSummary},
};

/// Invites minted at login expire after one day.
const INVITE_MAX_AGE_SECS: u32 = 86_400;

pub struct GuildService<'a> {
    connection: &'a dyn BotConnection,
}

impl<'a> GuildService<'a> {
    pub fn new(connection: &'a dyn BotConnection) -> Self {
        Self { connection }
    }

    /// Lists the guilds currently in the connection's cache.
    pub fn cached(&self) -> Vec<GuildSummary> {
        self.connection
            .cached_guilds()
            .into_iter()
            .map(GuildSummary::from_cached)
            .collect()
    }

    /// Lists cached guilds with a one-day invite minted for each where possible.
    ///
    /// Invites are minted concurrently. A guild without a text channel the bot may create
    /// invites in, or whose invite request fails, is still returned with no invite.
    pub async fn cached_with_invites(&self) -> Vec<GuildSummary> {
        let guilds = self.cached();

        join_all(guilds.into_iter().map(|mut guild| async move {
            guild.invite_url = self.mint_invite(guild.id).await;
            guild
        }))
        .await
    }

    /// Lists text channels of a guild in which the bot may send messages.
    ///
    /// # Returns
    /// - `Ok(Vec<ChannelSummary>)` - Sendable text channels, possibly empty
    /// - `Err(AppError::ConnectionErr)` - Remote failure, e.g. the bot is not in the guild
    pub async fn sendable_channels(&self, guild_id: u64) -> Result<Vec<ChannelSummary>, AppError> {
        let channels = self.connection.guild_channels(guild_id).await?;

        Ok(channels
            .into_iter()
            .filter(|channel| {
                channel.kind == ChannelType::Text
                    && channel.permissions.contains(Permissions::SEND_MESSAGES)
            })
            .map(ChannelSummary::from_info)
            .collect())
    }

    /// Makes the bot leave a guild.
    pub async fn leave(&self, guild_id: u64) -> Result<(), AppError> {
        self.connection.leave_guild(guild_id).await?;

        tracing::info!(
            "Bot {} left guild {}",
            self.connection.user_id(),
            guild_id
        );

        Ok(())
    }

    /// Creates an invite in the first text channel, by position, that allows it.
    async fn mint_invite(&self, guild_id: u64) -> Option<String> {
        let channels = match self.connection.guild_channels(guild_id).await {
            Ok(channels) => channels,
            Err(e) => {
                tracing::debug!("Failed to fetch channels of guild {}: {}", guild_id, e);
                return None;
            }
        };

        let channel = channels
            .into_iter()
            .filter(|channel| {
                channel.kind == ChannelType::Text
                    && channel
                        .permissions
                        .contains(Permissions::CREATE_INSTANT_INVITE)
            })
            .min_by_key(|channel| (channel.position, channel.id))?;

        let options = InviteOptions {
            max_age: INVITE_MAX_AGE_SECS,
            max_uses: 0,
            unique: true,
        };

        match self.connection.create_invite(channel.id, options).await {
            Ok(code) => Some(format!("https://discord.gg/{}", code)),
            Err(e) => {
                tracing::debug!("Failed to create invite in guild {}: {}", guild_id, e);
                None
            }
        }
    }
}
