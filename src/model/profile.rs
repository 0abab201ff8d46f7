use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Default)]
pub struct StatusDto {
    /// One of `online`, `idle`, `dnd`, `invisible`; defaults to `online`.
    pub status: Option<String>,
    pub activity: Option<ActivityDto>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone)]
pub struct ActivityDto {
    pub name: Option<String>,
    /// 0 playing, 1 streaming, 2 listening, 3 watching, 4 custom, 5 competing.
    #[serde(rename = "type")]
    pub kind: Option<u8>,
    /// Stream URL, required for streaming activities.
    pub url: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Default)]
pub struct NicknameDto {
    /// New nickname; empty or omitted resets it.
    pub nickname: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Default)]
pub struct AvatarDto {
    /// Base64 image, raw or as a `data:` URI.
    #[serde(rename = "avatarBase64")]
    pub avatar_base64: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Default)]
pub struct UsernameDto {
    pub username: Option<String>,
}
