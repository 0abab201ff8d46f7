use connection::model::GuildChannelInfo;
use serenity::all::ChannelType;
use test_utils::{
    builder::TestBuilder,
    fake::{FakeBot, FakeConnection, FakeOperation},
    fixture::{self, permission},
};

use crate::server::error::{auth::AuthError, AppError};

mod guild;

const GUILD_ID: u64 = 100000000000000001;
const SECOND_GUILD_ID: u64 = 100000000000000002;
const GENERAL_ID: u64 = 200000000000000001;
const ANNOUNCEMENTS_ID: u64 = 200000000000000002;
const VOICE_ID: u64 = 200000000000000003;
const LOCKED_ID: u64 = 200000000000000004;

/// Bot in one guild with a sendable text channel, a read-only text channel and a voice channel.
fn default_bot() -> FakeBot {
    FakeBot::builder(900000000000000001, "Moonbot")
        .guild(
            fixture::guild(GUILD_ID, "Moon Base"),
            vec![
                fixture::text_channel(GENERAL_ID, "general", permission::SEND_AND_INVITE),
                fixture::text_channel(ANNOUNCEMENTS_ID, "announcements", permission::READ),
                fixture::voice_channel(VOICE_ID, "lounge", permission::SEND),
            ],
        )
        .build()
}

/// Opens a connection to a fake bot without going through the session registry.
fn connect(bot: &FakeBot) -> FakeConnection {
    FakeConnection::new(bot.clone())
}
