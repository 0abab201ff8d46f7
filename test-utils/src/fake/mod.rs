//! In-memory stand-in for Discord.
//!
//! A `FakeBot` is the remote side: one bot account with its guilds, channels, messages and
//! profile. `FakeConnector` hands out a fresh `FakeConnection` for every successful login, all
//! sharing the bot's remote state the way two real logins with the same token would.
//!
//! The fake applies the Discord rules the application relies on:
//! - Invites need `CREATE_INSTANT_INVITE` in the channel
//! - Messages need `SEND_MESSAGES` in the channel
//! - Message fetches return the newest messages first
//! - Leaving a guild removes it from the guild cache
//!
//! Any operation can be forced to fail with `FakeBot::fail`, and every remote call is recorded
//! so tests can assert what did or did not reach Discord.

pub mod bot;
pub mod connection;
pub mod connector;

pub use bot::{FakeBot, FakeBotBuilder, FakeOperation};
pub use connection::FakeConnection;
pub use connector::FakeConnector;
