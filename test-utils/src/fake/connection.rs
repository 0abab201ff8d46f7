use connection::{
    model::{BotUser, CachedGuild, GuildChannelInfo, InviteOptions, MessageInfo},
    BotConnection, ConnectionError,
};
use serenity::all::{ActivityData, ChannelType, OnlineStatus, Permissions};
use serenity::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::fake::bot::{BotState, FakeBot, FakeOperation};

/// One login of a fake bot.
pub struct FakeConnection {
    bot: FakeBot,
    closed: AtomicBool,
}

impl FakeConnection {
    pub fn new(bot: FakeBot) -> Self {
        Self {
            bot,
            closed: AtomicBool::new(false),
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    /// Runs `f` against the remote state after the closed check, stall, failure injection and
    /// call recording.
    async fn call<T>(
        &self,
        operation: FakeOperation,
        f: impl FnOnce(&mut BotState) -> Result<T, ConnectionError>,
    ) -> Result<T, ConnectionError> {
        if self.is_closed() {
            return Err(ConnectionError::Closed);
        }

        let stalled = self.bot.state().is_stalled(operation);
        if stalled {
            std::future::pending::<()>().await;
        }

        let mut state = self.bot.state();

        if let Some(message) = state.record(operation) {
            return Err(ConnectionError::Rejected(message));
        }

        f(&mut state)
    }
}

fn require_permission(
    state: &BotState,
    channel_id: u64,
    permission: Permissions,
) -> Result<(), ConnectionError> {
    let Some(channel) = state.find_channel(channel_id) else {
        return Err(ConnectionError::Rejected("Unknown Channel".to_string()));
    };

    if !channel.permissions.contains(permission) {
        return Err(ConnectionError::Rejected("Missing Permissions".to_string()));
    }

    Ok(())
}

#[async_trait]
impl BotConnection for FakeConnection {
    fn user_id(&self) -> u64 {
        self.bot.state().user.id
    }

    async fn current_user(&self) -> Result<BotUser, ConnectionError> {
        self.call(FakeOperation::CurrentUser, |state| Ok(state.user.clone()))
            .await
    }

    fn cached_guilds(&self) -> Vec<CachedGuild> {
        self.bot
            .state()
            .guilds
            .iter()
            .map(|guild| guild.guild.clone())
            .collect()
    }

    async fn guild_channels(&self, guild_id: u64) -> Result<Vec<GuildChannelInfo>, ConnectionError> {
        self.call(FakeOperation::GuildChannels, |state| {
            state
                .guilds
                .iter()
                .find(|guild| guild.guild.id == guild_id)
                .map(|guild| guild.channels.clone())
                .ok_or_else(|| ConnectionError::Rejected("Unknown Guild".to_string()))
        })
        .await
    }

    async fn create_invite(
        &self,
        channel_id: u64,
        options: InviteOptions,
    ) -> Result<String, ConnectionError> {
        self.call(FakeOperation::CreateInvite, |state| {
            require_permission(state, channel_id, Permissions::CREATE_INSTANT_INVITE)?;

            state.invites.push((channel_id, options));

            Ok(format!("invite{}", state.invites.len()))
        })
        .await
    }

    async fn channel_kind(&self, channel_id: u64) -> Result<Option<ChannelType>, ConnectionError> {
        self.call(FakeOperation::ChannelKind, |state| {
            Ok(state.find_channel(channel_id).map(|channel| channel.kind))
        })
        .await
    }

    async fn recent_messages(
        &self,
        channel_id: u64,
        limit: u8,
    ) -> Result<Vec<MessageInfo>, ConnectionError> {
        self.call(FakeOperation::RecentMessages, |state| {
            let messages = state
                .messages
                .get(&channel_id)
                .map(|messages| {
                    messages
                        .iter()
                        .rev()
                        .take(limit as usize)
                        .cloned()
                        .collect()
                })
                .unwrap_or_default();

            Ok(messages)
        })
        .await
    }

    async fn send_message(&self, channel_id: u64, content: &str) -> Result<u64, ConnectionError> {
        self.call(FakeOperation::SendMessage, |state| {
            require_permission(state, channel_id, Permissions::SEND_MESSAGES)?;

            let author = state.user.username.clone();

            Ok(state.push_message(channel_id, &author, content))
        })
        .await
    }

    async fn set_presence(
        &self,
        status: OnlineStatus,
        activity: Option<ActivityData>,
    ) -> Result<(), ConnectionError> {
        self.call(FakeOperation::SetPresence, |state| {
            state.presence = Some((status, activity));
            Ok(())
        })
        .await
    }

    async fn set_nickname(
        &self,
        guild_id: u64,
        nickname: Option<&str>,
    ) -> Result<(), ConnectionError> {
        self.call(FakeOperation::SetNickname, |state| {
            if !state.guilds.iter().any(|guild| guild.guild.id == guild_id) {
                return Err(ConnectionError::Rejected("Unknown Guild".to_string()));
            }

            state
                .nicknames
                .insert(guild_id, nickname.map(str::to_string));
            Ok(())
        })
        .await
    }

    async fn set_avatar(&self, image: Vec<u8>) -> Result<(), ConnectionError> {
        self.call(FakeOperation::SetAvatar, |state| {
            state.avatar = Some(image);
            Ok(())
        })
        .await
    }

    async fn set_username(&self, username: &str) -> Result<(), ConnectionError> {
        self.call(FakeOperation::SetUsername, |state| {
            state.user.username = username.to_string();
            Ok(())
        })
        .await
    }

    async fn leave_guild(&self, guild_id: u64) -> Result<(), ConnectionError> {
        self.call(FakeOperation::LeaveGuild, |state| {
            let before = state.guilds.len();
            state.guilds.retain(|guild| guild.guild.id != guild_id);

            if state.guilds.len() == before {
                return Err(ConnectionError::Rejected("Unknown Guild".to_string()));
            }

            state.left_guilds.push(guild_id);
            Ok(())
        })
        .await
    }

    async fn shutdown(&self) {
        if !self.closed.swap(true, Ordering::AcqRel) {
            self.bot.state().shutdowns += 1;
        }
    }
}
