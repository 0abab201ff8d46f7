use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::discord::{
    deserialize_u64_from_string, serialize_u64_as_string, LoginGuildDto,
};

#[derive(Serialize, Deserialize, ToSchema, Default)]
pub struct LoginDto {
    /// Discord bot token.
    pub token: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, PartialEq, Clone)]
pub struct BotUserDto {
    #[serde(
        serialize_with = "serialize_u64_as_string",
        deserialize_with = "deserialize_u64_from_string"
    )]
    #[schema(value_type = String)]
    pub id: u64,
    pub username: String,
    #[serde(rename = "avatarURL")]
    pub avatar_url: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct LoginResponseDto {
    /// Opaque session id; anyone holding it controls the bot session.
    #[serde(rename = "sessionId")]
    pub session_id: String,
    pub user: BotUserDto,
    pub guilds: Vec<LoginGuildDto>,
}
