//! Guild and channel domain models.
//!
//! Both are read-only projections of remote state, rebuilt on every request.

use connection::model::{CachedGuild, GuildChannelInfo};

use crate::model::discord::{ChannelDto, GuildDto, LoginGuildDto};

/// Guild the bot belongs to, as seen in the connection's guild cache.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildSummary {
    /// Discord guild ID as a u64.
    pub id: u64,
    /// Guild display name.
    pub name: String,
    /// Guild icon URL, if the guild has an icon.
    pub icon_url: Option<String>,
    /// Approximate member count.
    pub member_count: u64,
    /// Invite link minted during login; always `None` outside of login.
    pub invite_url: Option<String>,
}

impl GuildSummary {
    /// Converts a cached guild to a domain model without an invite.
    pub fn from_cached(guild: CachedGuild) -> Self {
        Self {
            id: guild.id,
            name: guild.name,
            icon_url: guild.icon_url,
            member_count: guild.member_count,
            invite_url: None,
        }
    }

    /// Converts domain model to DTO for guild listings, dropping the invite.
    pub fn into_dto(self) -> GuildDto {
        GuildDto {
            id: self.id,
            name: self.name,
            icon_url: self.icon_url,
            member_count: self.member_count,
        }
    }

    /// Converts domain model to DTO for the login response, keeping the invite.
    pub fn into_login_dto(self) -> LoginGuildDto {
        let invite_url = self.invite_url.clone();

        LoginGuildDto {
            guild: self.into_dto(),
            invite_url,
        }
    }
}

/// Text channel in which the bot may send messages.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelSummary {
    /// Discord channel ID as a u64.
    pub id: u64,
    /// Channel display name.
    pub name: String,
}

impl ChannelSummary {
    pub fn from_info(channel: GuildChannelInfo) -> Self {
        Self {
            id: channel.id,
            name: channel.name,
        }
    }

    pub fn into_dto(self) -> ChannelDto {
        ChannelDto {
            id: self.id,
            name: self.name,
        }
    }
}
