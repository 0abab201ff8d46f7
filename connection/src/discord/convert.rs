//! Conversions from Serenity models to connection models.

use serenity::all::{CurrentUser, Guild, GuildChannel, Message, Permissions};

use crate::model::{snowflake_timestamp, BotUser, CachedGuild, GuildChannelInfo, MessageInfo};

/// Converts the current user, falling back to the default avatar URL when no custom avatar is
/// set.
pub fn bot_user(user: &CurrentUser) -> BotUser {
    BotUser {
        id: user.id.get(),
        username: user.name.clone(),
        avatar_url: user.face(),
    }
}

pub fn cached_guild(guild: &Guild) -> CachedGuild {
    CachedGuild {
        id: guild.id.get(),
        name: guild.name.clone(),
        icon_url: guild.icon_url(),
        member_count: guild.member_count,
    }
}

pub fn guild_channel_info(channel: &GuildChannel, permissions: Permissions) -> GuildChannelInfo {
    GuildChannelInfo {
        id: channel.id.get(),
        name: channel.name.clone(),
        kind: channel.kind,
        position: channel.position,
        permissions,
    }
}

/// Converts a message, deriving the creation time from the message's snowflake id.
pub fn message_info(message: &Message) -> MessageInfo {
    MessageInfo {
        id: message.id.get(),
        author: message.author.name.clone(),
        content: message.content.clone(),
        timestamp: snowflake_timestamp(message.id.get()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serenity::all::ChannelType;

    fn test_guild(guild_id: u64, name: &str, icon_hash: Option<&str>) -> Guild {
        serde_json::from_value(serde_json::json!({
            "id": guild_id.to_string(),
            "name": name,
            "icon": icon_hash,
            "icon_hash": icon_hash,
            "owner_id": "100000000000000000",
            "afk_timeout": 300,
            "verification_level": 0,
            "default_message_notifications": 0,
            "explicit_content_filter": 0,
            "roles": [],
            "emojis": [],
            "stickers": [],
            "features": [],
            "mfa_level": 0,
            "system_channel_flags": 0,
            "premium_tier": 0,
            "premium_subscription_count": 0,
            "premium_progress_bar_enabled": false,
            "preferred_locale": "en-US",
            "nsfw_level": 0,
            "joined_at": "2020-01-01T00:00:00.000000+00:00",
            "large": false,
            "member_count": 42,
            "voice_states": [],
            "channels": [],
            "threads": [],
            "presences": [],
            "max_presences": 25000,
            "max_members": 100000,
            "unavailable": false,
            "members": [],
            "stage_instances": [],
            "guild_scheduled_events": [],
        }))
        .expect("Failed to create test guild - invalid JSON structure")
    }

    fn test_channel(channel_id: u64, name: &str, kind: u8, position: u16) -> GuildChannel {
        serde_json::from_value(serde_json::json!({
            "id": channel_id.to_string(),
            "guild_id": "200000000000000000",
            "type": kind,
            "name": name,
            "position": position,
            "permission_overwrites": [],
            "nsfw": false,
            "topic": null,
            "last_message_id": null,
            "parent_id": null,
            "rate_limit_per_user": 0,
            "flags": 0,
        }))
        .expect("Failed to create test channel - invalid JSON structure")
    }

    fn test_message(message_id: u64, author: &str, content: &str) -> Message {
        serde_json::from_value(serde_json::json!({
            "id": message_id.to_string(),
            "channel_id": "300000000000000000",
            "author": {
                "id": "400000000000000000",
                "username": author,
                "discriminator": "0",
                "global_name": null,
                "avatar": null,
                "bot": false,
            },
            "content": content,
            "timestamp": "2024-01-01T00:00:00.000000+00:00",
            "edited_timestamp": null,
            "tts": false,
            "mention_everyone": false,
            "mentions": [],
            "mention_roles": [],
            "mention_channels": [],
            "attachments": [],
            "embeds": [],
            "reactions": [],
            "components": [],
            "sticker_items": [],
            "pinned": false,
            "type": 0,
        }))
        .expect("Failed to create test message - invalid JSON structure")
    }

    /// Tests converting a cached guild with an icon.
    ///
    /// Expected: id, name, member count copied and icon URL built from the hash
    #[test]
    fn converts_cached_guild_with_icon() {
        let guild = test_guild(123456789, "Test Guild", Some("abc12300000000000000000000000000"));

        let cached = cached_guild(&guild);

        assert_eq!(cached.id, 123456789);
        assert_eq!(cached.name, "Test Guild");
        assert_eq!(cached.member_count, 42);
        let icon_url = cached.icon_url.unwrap();
        assert!(icon_url.contains("123456789"));
        assert!(icon_url.contains("abc12300000000000000000000000000"));
    }

    /// Tests converting a cached guild without an icon.
    ///
    /// Expected: icon URL is None
    #[test]
    fn converts_cached_guild_without_icon() {
        let guild = test_guild(123456789, "Plain Guild", None);

        assert_eq!(cached_guild(&guild).icon_url, None);
    }

    /// Tests converting a guild channel keeps its kind, position and the given permissions.
    ///
    /// Expected: fields copied from the channel, permissions passed through
    #[test]
    fn converts_guild_channel_with_permissions() {
        let channel = test_channel(555, "general", 0, 3);
        let permissions = Permissions::VIEW_CHANNEL | Permissions::SEND_MESSAGES;

        let info = guild_channel_info(&channel, permissions);

        assert_eq!(info.id, 555);
        assert_eq!(info.name, "general");
        assert_eq!(info.kind, ChannelType::Text);
        assert_eq!(info.position, 3);
        assert!(info.permissions.contains(Permissions::SEND_MESSAGES));
        assert!(!info.permissions.contains(Permissions::CREATE_INSTANT_INVITE));
    }

    /// Tests that message timestamps come from the snowflake rather than the payload.
    ///
    /// Snowflake 175928847299117063 was created at 1462015105796 ms.
    ///
    /// Expected: timestamp decoded from the id, author username copied
    #[test]
    fn converts_message_with_snowflake_timestamp() {
        let message = test_message(175928847299117063, "moonman", "hello");

        let info = message_info(&message);

        assert_eq!(info.id, 175928847299117063);
        assert_eq!(info.author, "moonman");
        assert_eq!(info.content, "hello");
        assert_eq!(info.timestamp, 1462015105796);
    }
}
