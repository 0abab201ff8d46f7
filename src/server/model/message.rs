use connection::model::MessageInfo;

use crate::{
    model::discord::{MessageDto, SendMessageDto},
    server::error::AppError,
};

/// Channel message as returned by message listings.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageSummary {
    pub id: u64,
    /// Username of the author.
    pub author: String,
    pub content: String,
    /// Creation time in Unix milliseconds.
    pub timestamp: i64,
}

impl MessageSummary {
    pub fn from_info(message: MessageInfo) -> Self {
        Self {
            id: message.id,
            author: message.author,
            content: message.content,
            timestamp: message.timestamp,
        }
    }

    pub fn into_dto(self) -> MessageDto {
        MessageDto {
            id: self.id,
            author: self.author,
            content: self.content,
            timestamp: self.timestamp,
        }
    }
}

/// Validated content of a message to send.
#[derive(Debug, Clone, PartialEq)]
pub struct SendMessageParam {
    /// Message text, sent as provided (not trimmed).
    pub content: String,
}

impl TryFrom<SendMessageDto> for SendMessageParam {
    type Error = AppError;

    /// Rejects omitted, empty and whitespace-only content.
    fn try_from(dto: SendMessageDto) -> Result<Self, Self::Error> {
        match dto.content {
            Some(content) if !content.trim().is_empty() => Ok(Self { content }),
            _ => Err(AppError::BadRequest(
                "Message content required".to_string(),
            )),
        }
    }
}
