//! Test fixtures providing reusable guild and channel values.
//!
//! Fixtures only build in-memory values; use them to seed a `FakeBot`.

use connection::model::{CachedGuild, GuildChannelInfo};
use serenity::all::{ChannelType, Permissions};

/// Permission sets commonly granted to the bot in test channels.
pub mod permission {
    use serenity::all::Permissions;

    /// Channel visible but read-only.
    pub const READ: Permissions = Permissions::VIEW_CHANNEL;

    /// Channel where the bot can post messages.
    pub const SEND: Permissions = Permissions::VIEW_CHANNEL.union(Permissions::SEND_MESSAGES);

    /// Channel where the bot can create invites but not post.
    pub const INVITE: Permissions =
        Permissions::VIEW_CHANNEL.union(Permissions::CREATE_INSTANT_INVITE);

    /// Channel where the bot can post and create invites.
    pub const SEND_AND_INVITE: Permissions = SEND.union(INVITE);
}

/// Creates a cached guild with an icon and 10 members.
pub fn guild(id: u64, name: &str) -> CachedGuild {
    CachedGuild {
        id,
        name: name.to_string(),
        icon_url: Some(format!(
            "https://cdn.discordapp.com/icons/{}/abc12300000000000000000000000000.webp",
            id
        )),
        member_count: 10,
    }
}

/// Creates a text channel at position 0 with the given bot permissions.
pub fn text_channel(id: u64, name: &str, permissions: Permissions) -> GuildChannelInfo {
    channel(id, name, ChannelType::Text, permissions)
}

/// Creates a voice channel at position 0 with the given bot permissions.
pub fn voice_channel(id: u64, name: &str, permissions: Permissions) -> GuildChannelInfo {
    channel(id, name, ChannelType::Voice, permissions)
}

/// Creates a channel of any kind at position 0.
pub fn channel(
    id: u64,
    name: &str,
    kind: ChannelType,
    permissions: Permissions,
) -> GuildChannelInfo {
    GuildChannelInfo {
        id,
        name: name.to_string(),
        kind,
        position: 0,
        permissions,
    }
}
