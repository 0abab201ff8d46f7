use connection::model::BotUser;

use crate::{
    model::session::{BotUserDto, LoginResponseDto},
    server::model::guild::GuildSummary,
};

/// Outcome of a successful login.
#[derive(Debug, Clone)]
pub struct LoginResult {
    /// Newly issued session id.
    pub session_id: String,
    /// Profile of the logged-in bot.
    pub user: BotUser,
    /// Every guild the bot belongs to, with invites where one could be minted.
    pub guilds: Vec<GuildSummary>,
}

impl LoginResult {
    pub fn into_dto(self) -> LoginResponseDto {
        LoginResponseDto {
            session_id: self.session_id,
            user: BotUserDto {
                id: self.user.id,
                username: self.user.username,
                avatar_url: self.user.avatar_url,
            },
            guilds: self
                .guilds
                .into_iter()
                .map(GuildSummary::into_login_dto)
                .collect(),
        }
    }
}
