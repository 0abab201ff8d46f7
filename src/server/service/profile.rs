use connection::BotConnection;

use crate::server::{
    error::AppError,
    model::profile::{AvatarParam, NicknameParam, PresenceParam, UsernameParam},
};

/// Mutations of the bot's own identity and presence.
pub struct ProfileService<'a> {
    connection: &'a dyn BotConnection,
}

impl<'a> ProfileService<'a> {
    pub fn new(connection: &'a dyn BotConnection) -> Self {
        Self { connection }
    }

    pub async fn set_presence(&self, param: PresenceParam) -> Result<(), AppError> {
        self.connection
            .set_presence(param.status, param.activity)
            .await?;

        Ok(())
    }

    /// Sets the bot's nickname in a guild, or resets it when the param holds `None`.
    pub async fn set_nickname(&self, guild_id: u64, param: NicknameParam) -> Result<(), AppError> {
        self.connection
            .set_nickname(guild_id, param.nickname.as_deref())
            .await?;

        Ok(())
    }

    pub async fn set_avatar(&self, param: AvatarParam) -> Result<(), AppError> {
        self.connection.set_avatar(param.image).await?;

        tracing::info!("Bot {} updated its avatar", self.connection.user_id());

        Ok(())
    }

    pub async fn set_username(&self, param: UsernameParam) -> Result<(), AppError> {
        self.connection.set_username(&param.username).await?;

        tracing::info!(
            "Bot {} changed its username to {}",
            self.connection.user_id(),
            param.username
        );

        Ok(())
    }
}
