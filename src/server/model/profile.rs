//! Validated parameters for bot profile mutations.
//!
//! Controllers convert request DTOs into these types before any remote call, so malformed
//! input is rejected with 400 Bad Request without reaching Discord.

use base64::{engine::general_purpose::STANDARD, Engine};
use serenity::all::{ActivityData, OnlineStatus};

use crate::{
    model::profile::{ActivityDto, AvatarDto, NicknameDto, StatusDto, UsernameDto},
    server::error::AppError,
};

/// Presence to apply to the bot.
#[derive(Debug, Clone)]
pub struct PresenceParam {
    pub status: OnlineStatus,
    pub activity: Option<ActivityData>,
}

impl TryFrom<StatusDto> for PresenceParam {
    type Error = AppError;

    fn try_from(dto: StatusDto) -> Result<Self, Self::Error> {
        let status = match dto.status.as_deref() {
            None | Some("online") => OnlineStatus::Online,
            Some("idle") => OnlineStatus::Idle,
            Some("dnd") => OnlineStatus::DoNotDisturb,
            Some("invisible") => OnlineStatus::Invisible,
            Some(other) => {
                return Err(AppError::BadRequest(format!("Invalid status '{}'", other)));
            }
        };

        let activity = dto.activity.map(parse_activity).transpose()?;

        Ok(Self { status, activity })
    }
}

/// Builds an activity using Discord's activity type numbering.
fn parse_activity(dto: ActivityDto) -> Result<ActivityData, AppError> {
    let Some(name) = dto.name.filter(|name| !name.trim().is_empty()) else {
        return Err(AppError::BadRequest("Activity name required".to_string()));
    };

    let activity = match dto.kind.unwrap_or(0) {
        0 => ActivityData::playing(name),
        1 => {
            let Some(url) = dto.url else {
                return Err(AppError::BadRequest(
                    "Streaming activity requires a url".to_string(),
                ));
            };

            ActivityData::streaming(name, url.as_str())
                .map_err(|e| AppError::BadRequest(format!("Invalid stream url: {}", e)))?
        }
        2 => ActivityData::listening(name),
        3 => ActivityData::watching(name),
        4 => ActivityData::custom(name),
        5 => ActivityData::competing(name),
        other => {
            return Err(AppError::BadRequest(format!(
                "Invalid activity type {}",
                other
            )));
        }
    };

    Ok(activity)
}

/// Nickname to set in a guild, `None` resets it.
#[derive(Debug, Clone, PartialEq)]
pub struct NicknameParam {
    pub nickname: Option<String>,
}

impl From<NicknameDto> for NicknameParam {
    fn from(dto: NicknameDto) -> Self {
        Self {
            nickname: dto.nickname.filter(|nickname| !nickname.is_empty()),
        }
    }
}

/// Decoded avatar image bytes.
#[derive(Debug, Clone, PartialEq)]
pub struct AvatarParam {
    pub image: Vec<u8>,
}

impl TryFrom<AvatarDto> for AvatarParam {
    type Error = AppError;

    /// Accepts raw base64 or a `data:<mime>;base64,<payload>` URI.
    fn try_from(dto: AvatarDto) -> Result<Self, Self::Error> {
        let Some(payload) = dto.avatar_base64.filter(|payload| !payload.trim().is_empty()) else {
            return Err(AppError::BadRequest("Avatar image required".to_string()));
        };

        let encoded = match payload.strip_prefix("data:") {
            Some(uri) => match uri.split_once(";base64,") {
                Some((_, encoded)) => encoded,
                None => {
                    return Err(AppError::BadRequest(
                        "Avatar data URI must be base64 encoded".to_string(),
                    ));
                }
            },
            None => payload.as_str(),
        };

        let image = STANDARD
            .decode(encoded.trim())
            .map_err(|e| AppError::BadRequest(format!("Invalid avatar image: {}", e)))?;

        if image.is_empty() {
            return Err(AppError::BadRequest("Avatar image required".to_string()));
        }

        Ok(Self { image })
    }
}

/// New global username.
#[derive(Debug, Clone, PartialEq)]
pub struct UsernameParam {
    pub username: String,
}

impl TryFrom<UsernameDto> for UsernameParam {
    type Error = AppError;

    fn try_from(dto: UsernameDto) -> Result<Self, Self::Error> {
        match dto.username {
            Some(username) if !username.trim().is_empty() => Ok(Self { username }),
            _ => Err(AppError::BadRequest("Username required".to_string())),
        }
    }
}
