//! Bot Connection
//!
//! Provides the seam between the HTTP layer and the Discord client library. The rest of the
//! workspace only ever talks to a logged-in bot through the [`BotConnection`] trait and creates
//! connections through a [`BotConnector`], which keeps request handling independent of the
//! gateway and lets tests substitute an in-memory implementation.
//!
//! # Overview
//!
//! - **client**: The `BotConnector` / `BotConnection` traits
//! - **model**: Plain data returned by connection operations
//! - **error**: `ConnectionError`, the single error type of every connection operation
//! - **discord**: The Serenity-backed implementation used in production
//!
//! # Cache Policy
//!
//! `BotConnection::cached_guilds` is the only operation served from the client library's local
//! cache. Every other read goes to Discord's HTTP API.

pub mod client;
pub mod discord;
pub mod error;
pub mod model;

pub use client::{BotConnection, BotConnector};
pub use error::ConnectionError;
