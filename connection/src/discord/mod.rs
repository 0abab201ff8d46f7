//! Serenity-backed bot connections.
//!
//! Each login builds its own Serenity `Client` and runs it on a dedicated tokio task. The
//! connector waits for the gateway `ready` event, then for the guild cache to fill, before
//! handing out the connection so that the cached guild list is complete.
//!
//! # Gateway Intents
//!
//! The default intents match what the HTTP API needs:
//! - `GUILDS` - Guild cache for guild listings
//! - `GUILD_MEMBERS` - Member data for permission resolution (privileged intent)
//! - `GUILD_MESSAGES` - Message events in guilds
//! - `MESSAGE_CONTENT` - Content of fetched messages (privileged intent)
//!
//! Privileged intents must be enabled in the Discord Developer Portal, otherwise the gateway
//! refuses the login.

pub mod connection;
pub mod connector;
pub mod convert;
pub mod handler;

pub use connection::SerenityConnection;
pub use connector::{SerenityConnector, DEFAULT_INTENTS};
