use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Debug, PartialEq, Clone)]
pub struct GuildDto {
    #[serde(
        serialize_with = "serialize_u64_as_string",
        deserialize_with = "deserialize_u64_from_string"
    )]
    #[schema(value_type = String)]
    pub id: u64,
    pub name: String,
    #[serde(rename = "iconURL")]
    pub icon_url: Option<String>,
    #[serde(rename = "memberCount")]
    pub member_count: u64,
}

/// Guild as reported by login, with the invite minted during login.
#[derive(Serialize, Deserialize, ToSchema, Debug, PartialEq, Clone)]
pub struct LoginGuildDto {
    #[serde(flatten)]
    pub guild: GuildDto,
    /// `null` when the bot could not create an invite in this guild.
    #[serde(rename = "inviteURL")]
    pub invite_url: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct GuildsDto {
    pub guilds: Vec<GuildDto>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, PartialEq, Clone)]
pub struct ChannelDto {
    #[serde(
        serialize_with = "serialize_u64_as_string",
        deserialize_with = "deserialize_u64_from_string"
    )]
    #[schema(value_type = String)]
    pub id: u64,
    pub name: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ChannelsDto {
    pub channels: Vec<ChannelDto>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, PartialEq, Clone)]
pub struct MessageDto {
    #[serde(
        serialize_with = "serialize_u64_as_string",
        deserialize_with = "deserialize_u64_from_string"
    )]
    #[schema(value_type = String)]
    pub id: u64,
    /// Username of the author.
    pub author: String,
    pub content: String,
    /// Creation time in Unix milliseconds.
    pub timestamp: i64,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct MessagesDto {
    pub messages: Vec<MessageDto>,
}

#[derive(Serialize, Deserialize, ToSchema, Default)]
pub struct SendMessageDto {
    pub content: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct SentMessageDto {
    pub success: bool,
    #[serde(
        rename = "messageId",
        serialize_with = "serialize_u64_as_string",
        deserialize_with = "deserialize_u64_from_string"
    )]
    #[schema(value_type = String)]
    pub message_id: u64,
}

pub(crate) fn serialize_u64_as_string<S>(value: &u64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&value.to_string())
}

pub(crate) fn deserialize_u64_from_string<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;
    String::deserialize(deserializer)?
        .parse::<u64>()
        .map_err(D::Error::custom)
}
