use connection::model::{
    BotUser, CachedGuild, GuildChannelInfo, InviteOptions, MessageInfo, DISCORD_EPOCH_MS,
};
use serenity::all::{ActivityData, OnlineStatus};
use std::{
    collections::{HashMap, HashSet},
    sync::{Arc, Mutex, MutexGuard},
};

/// Snowflake of the first seeded message, created 2024-01-01T00:00:00Z.
const FIRST_MESSAGE_ID: u64 = ((1_704_067_200_000 - DISCORD_EPOCH_MS) as u64) << 22;

/// Snowflake increment of one millisecond.
const MESSAGE_ID_STEP: u64 = 1 << 22;

/// Remote operations of a bot connection, used for failure injection and call recording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FakeOperation {
    CurrentUser,
    GuildChannels,
    CreateInvite,
    ChannelKind,
    RecentMessages,
    SendMessage,
    SetPresence,
    SetNickname,
    SetAvatar,
    SetUsername,
    LeaveGuild,
}

/// Guild of a fake bot with its channels.
#[derive(Debug, Clone)]
pub struct FakeGuild {
    pub guild: CachedGuild,
    pub channels: Vec<GuildChannelInfo>,
}

/// Remote state of a fake bot account.
#[derive(Debug)]
pub struct BotState {
    pub user: BotUser,
    pub guilds: Vec<FakeGuild>,
    /// Messages per channel id in creation order.
    pub messages: HashMap<u64, Vec<MessageInfo>>,
    /// Invites created, as (channel id, options).
    pub invites: Vec<(u64, InviteOptions)>,
    pub presence: Option<(OnlineStatus, Option<ActivityData>)>,
    /// Nickname per guild id, `None` once reset.
    pub nicknames: HashMap<u64, Option<String>>,
    pub avatar: Option<Vec<u8>>,
    pub left_guilds: Vec<u64>,
    /// Every remote call in the order it was made.
    pub calls: Vec<FakeOperation>,
    /// Number of connections shut down.
    pub shutdowns: usize,
    failures: HashMap<FakeOperation, String>,
    stalls: HashSet<FakeOperation>,
    next_message_id: u64,
}

impl BotState {
    /// Records a call and returns the injected failure message, if any.
    pub(crate) fn record(&mut self, operation: FakeOperation) -> Option<String> {
        self.calls.push(operation);
        self.failures.get(&operation).cloned()
    }

    pub(crate) fn is_stalled(&self, operation: FakeOperation) -> bool {
        self.stalls.contains(&operation)
    }

    pub(crate) fn find_channel(&self, channel_id: u64) -> Option<&GuildChannelInfo> {
        self.guilds
            .iter()
            .flat_map(|guild| guild.channels.iter())
            .find(|channel| channel.id == channel_id)
    }

    pub(crate) fn push_message(&mut self, channel_id: u64, author: &str, content: &str) -> u64 {
        let id = self.next_message_id;
        self.next_message_id += MESSAGE_ID_STEP;

        self.messages
            .entry(channel_id)
            .or_default()
            .push(MessageInfo {
                id,
                author: author.to_string(),
                content: content.to_string(),
                timestamp: connection::model::snowflake_timestamp(id),
            });

        id
    }
}

/// Handle to the remote state of a fake bot account.
///
/// Cloning shares the state.
#[derive(Debug, Clone)]
pub struct FakeBot {
    state: Arc<Mutex<BotState>>,
}

impl FakeBot {
    /// Starts building a bot account.
    ///
    /// # Arguments
    /// - `user_id` - Discord user ID of the bot
    /// - `username` - Bot username
    pub fn builder(user_id: u64, username: &str) -> FakeBotBuilder {
        FakeBotBuilder::new(user_id, username)
    }

    /// Locks the remote state for inspection or modification.
    pub fn state(&self) -> MutexGuard<'_, BotState> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Makes every future call of `operation` fail with `message`.
    pub fn fail(&self, operation: FakeOperation, message: &str) {
        self.state().failures.insert(operation, message.to_string());
    }

    /// Makes every future call of `operation` hang without ever reaching the remote side.
    pub fn stall(&self, operation: FakeOperation) {
        self.state().stalls.insert(operation);
    }

    /// Returns how many times `operation` reached the remote side.
    pub fn call_count(&self, operation: FakeOperation) -> usize {
        self.state()
            .calls
            .iter()
            .filter(|call| **call == operation)
            .count()
    }

    /// Returns the messages of a channel in creation order.
    pub fn messages(&self, channel_id: u64) -> Vec<MessageInfo> {
        self.state()
            .messages
            .get(&channel_id)
            .cloned()
            .unwrap_or_default()
    }
}

/// Fluent builder for `FakeBot`.
pub struct FakeBotBuilder {
    state: BotState,
}

impl FakeBotBuilder {
    fn new(user_id: u64, username: &str) -> Self {
        Self {
            state: BotState {
                user: BotUser {
                    id: user_id,
                    username: username.to_string(),
                    avatar_url: "https://cdn.discordapp.com/embed/avatars/0.png".to_string(),
                },
                guilds: Vec::new(),
                messages: HashMap::new(),
                invites: Vec::new(),
                presence: None,
                nicknames: HashMap::new(),
                avatar: None,
                left_guilds: Vec::new(),
                calls: Vec::new(),
                shutdowns: 0,
                failures: HashMap::new(),
                stalls: HashSet::new(),
                next_message_id: FIRST_MESSAGE_ID,
            },
        }
    }

    /// Adds a guild with its channels.
    pub fn guild(mut self, guild: CachedGuild, channels: Vec<GuildChannelInfo>) -> Self {
        self.state.guilds.push(FakeGuild { guild, channels });
        self
    }

    /// Appends a message to a channel. Each message is one millisecond newer than the previous.
    pub fn message(mut self, channel_id: u64, author: &str, content: &str) -> Self {
        self.state.push_message(channel_id, author, content);
        self
    }

    /// Appends `count` messages numbered from 1 to a channel.
    pub fn messages(mut self, channel_id: u64, author: &str, count: usize) -> Self {
        for n in 1..=count {
            self.state
                .push_message(channel_id, author, &format!("message {}", n));
        }
        self
    }

    pub fn build(self) -> FakeBot {
        FakeBot {
            state: Arc::new(Mutex::new(self.state)),
        }
    }
}
