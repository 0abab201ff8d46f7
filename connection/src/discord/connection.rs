use serenity::all::{
    ActivityData, Cache, Channel, ChannelId, ChannelType, Context, CreateAttachment,
    CreateInvite, CreateMessage, EditProfile, GuildId, OnlineStatus, ShardManager, UserId,
};
use serenity::async_trait;
use serenity::http::Http;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, Mutex,
};
use tokio::task::JoinHandle;

use crate::{
    client::BotConnection,
    discord::convert,
    error::ConnectionError,
    model::{BotUser, CachedGuild, GuildChannelInfo, InviteOptions, MessageInfo},
};

/// File name attached to avatar uploads; Discord sniffs the actual image format.
const AVATAR_FILE_NAME: &str = "avatar.png";

/// Logged-in bot backed by a running Serenity client.
pub struct SerenityConnection {
    user_id: u64,
    /// Shard context captured from the ready event, used for presence updates.
    ctx: Context,
    http: Arc<Http>,
    cache: Arc<Cache>,
    shard_manager: Arc<ShardManager>,
    task: Mutex<Option<JoinHandle<()>>>,
    closed: AtomicBool,
}

impl SerenityConnection {
    pub fn new(
        user_id: u64,
        ctx: Context,
        http: Arc<Http>,
        cache: Arc<Cache>,
        shard_manager: Arc<ShardManager>,
        task: JoinHandle<()>,
    ) -> Self {
        Self {
            user_id,
            ctx,
            http,
            cache,
            shard_manager,
            task: Mutex::new(Some(task)),
            closed: AtomicBool::new(false),
        }
    }

    fn ensure_open(&self) -> Result<(), ConnectionError> {
        if self.closed.load(Ordering::Acquire) {
            return Err(ConnectionError::Closed);
        }

        Ok(())
    }
}

#[async_trait]
impl BotConnection for SerenityConnection {
    fn user_id(&self) -> u64 {
        self.user_id
    }

    async fn current_user(&self) -> Result<BotUser, ConnectionError> {
        self.ensure_open()?;

        let user = self.http.get_current_user().await?;

        Ok(convert::bot_user(&user))
    }

    fn cached_guilds(&self) -> Vec<CachedGuild> {
        self.cache
            .guilds()
            .into_iter()
            .filter_map(|guild_id| {
                self.cache
                    .guild(guild_id)
                    .map(|guild| convert::cached_guild(&guild))
            })
            .collect()
    }

    /// Fetches channels, the guild's roles and the bot's member record from the HTTP API and
    /// resolves the bot's permissions per channel.
    async fn guild_channels(&self, guild_id: u64) -> Result<Vec<GuildChannelInfo>, ConnectionError> {
        self.ensure_open()?;

        let guild_id = GuildId::new(guild_id);

        let guild = self.http.get_guild(guild_id).await?;
        let member = self
            .http
            .get_member(guild_id, UserId::new(self.user_id))
            .await?;
        let channels = self.http.get_channels(guild_id).await?;

        Ok(channels
            .iter()
            .map(|channel| {
                let permissions = guild.user_permissions_in(channel, &member);
                convert::guild_channel_info(channel, permissions)
            })
            .collect())
    }

    async fn create_invite(
        &self,
        channel_id: u64,
        options: InviteOptions,
    ) -> Result<String, ConnectionError> {
        self.ensure_open()?;

        let builder = CreateInvite::new()
            .max_age(options.max_age)
            .max_uses(options.max_uses)
            .unique(options.unique);

        let invite = ChannelId::new(channel_id)
            .create_invite(&self.http, builder)
            .await?;

        Ok(invite.code)
    }

    async fn channel_kind(&self, channel_id: u64) -> Result<Option<ChannelType>, ConnectionError> {
        self.ensure_open()?;

        match self.http.get_channel(ChannelId::new(channel_id)).await {
            Ok(Channel::Guild(channel)) => Ok(Some(channel.kind)),
            Ok(Channel::Private(_)) => Ok(Some(ChannelType::Private)),
            Ok(_) => Ok(Some(ChannelType::Unknown(u8::MAX))),
            Err(e) => {
                let err = ConnectionError::from(e);
                if err.is_not_found() {
                    Ok(None)
                } else {
                    Err(err)
                }
            }
        }
    }

    async fn recent_messages(
        &self,
        channel_id: u64,
        limit: u8,
    ) -> Result<Vec<MessageInfo>, ConnectionError> {
        self.ensure_open()?;

        let messages = self
            .http
            .get_messages(ChannelId::new(channel_id), None, Some(limit))
            .await?;

        Ok(messages.iter().map(convert::message_info).collect())
    }

    async fn send_message(&self, channel_id: u64, content: &str) -> Result<u64, ConnectionError> {
        self.ensure_open()?;

        let message = ChannelId::new(channel_id)
            .send_message(&self.http, CreateMessage::new().content(content))
            .await?;

        Ok(message.id.get())
    }

    async fn set_presence(
        &self,
        status: OnlineStatus,
        activity: Option<ActivityData>,
    ) -> Result<(), ConnectionError> {
        self.ensure_open()?;

        self.ctx.set_presence(activity, status);

        Ok(())
    }

    async fn set_nickname(
        &self,
        guild_id: u64,
        nickname: Option<&str>,
    ) -> Result<(), ConnectionError> {
        self.ensure_open()?;

        GuildId::new(guild_id)
            .edit_nickname(&self.http, nickname)
            .await?;

        Ok(())
    }

    async fn set_avatar(&self, image: Vec<u8>) -> Result<(), ConnectionError> {
        self.ensure_open()?;

        let attachment = CreateAttachment::bytes(image, AVATAR_FILE_NAME);
        let mut user = self.http.get_current_user().await?;
        user.edit(&self.http, EditProfile::new().avatar(&attachment))
            .await?;

        Ok(())
    }

    async fn set_username(&self, username: &str) -> Result<(), ConnectionError> {
        self.ensure_open()?;

        let mut user = self.http.get_current_user().await?;
        user.edit(&self.http, EditProfile::new().username(username))
            .await?;

        Ok(())
    }

    async fn leave_guild(&self, guild_id: u64) -> Result<(), ConnectionError> {
        self.ensure_open()?;

        self.http.leave_guild(GuildId::new(guild_id)).await?;

        Ok(())
    }

    async fn shutdown(&self) {
        if self.closed.swap(true, Ordering::AcqRel) {
            return;
        }

        self.shard_manager.shutdown_all().await;

        if let Some(task) = self.task.lock().ok().and_then(|mut task| task.take()) {
            task.abort();
        }

        tracing::info!("Closed Discord connection for bot {}", self.user_id);
    }
}

impl Drop for SerenityConnection {
    /// Stops the gateway of a connection released without `shutdown`.
    fn drop(&mut self) {
        if self.closed.swap(true, Ordering::AcqRel) {
            return;
        }

        if let Some(task) = self.task.get_mut().ok().and_then(Option::take) {
            task.abort();
        }

        if let Ok(handle) = tokio::runtime::Handle::try_current() {
            let shard_manager = self.shard_manager.clone();
            handle.spawn(async move {
                shard_manager.shutdown_all().await;
            });
        }

        tracing::debug!("Dropped Discord connection for bot {}", self.user_id);
    }
}
