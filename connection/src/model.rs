//! Data returned by bot connection operations.
//!
//! Snowflake ids are carried as plain `u64` values. Channel kinds and permission sets reuse
//! Serenity's types since they are already the vocabulary of the Discord API.

use serenity::all::{ChannelType, Permissions};

/// Discord's epoch (2015-01-01T00:00:00Z) in Unix milliseconds.
pub const DISCORD_EPOCH_MS: i64 = 1_420_070_400_000;

/// Returns the creation time of a snowflake id in Unix milliseconds.
///
/// The upper 42 bits of a snowflake are milliseconds since the Discord epoch.
pub fn snowflake_timestamp(id: u64) -> i64 {
    (id >> 22) as i64 + DISCORD_EPOCH_MS
}

/// Profile of the logged-in bot user.
#[derive(Debug, Clone, PartialEq)]
pub struct BotUser {
    pub id: u64,
    pub username: String,
    /// Custom avatar URL, or Discord's default avatar URL when none is set.
    pub avatar_url: String,
}

/// Guild as held in the client library's local cache.
#[derive(Debug, Clone, PartialEq)]
pub struct CachedGuild {
    pub id: u64,
    pub name: String,
    pub icon_url: Option<String>,
    pub member_count: u64,
}

/// Channel of a guild together with the bot's effective permissions in it.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildChannelInfo {
    pub id: u64,
    pub name: String,
    pub kind: ChannelType,
    /// Position in the guild's channel list.
    pub position: u16,
    /// Permissions the bot holds in this channel after role and overwrite resolution.
    pub permissions: Permissions,
}

/// Message fetched from a channel.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageInfo {
    pub id: u64,
    /// Username of the message author.
    pub author: String,
    pub content: String,
    /// Creation time in Unix milliseconds.
    pub timestamp: i64,
}

/// Options used when minting an invite link.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InviteOptions {
    /// Lifetime in seconds, 0 for never expiring.
    pub max_age: u32,
    /// Number of uses, 0 for unlimited.
    pub max_uses: u8,
    /// Always create a new invite instead of reusing a similar one.
    pub unique: bool,
}
