//! Data transfer objects of the HTTP API.
//!
//! Field names follow the JSON shape clients expect (camelCase with `URL` suffixes), and
//! Discord snowflakes are serialized as strings since they do not fit in a JSON number.

pub mod api;
pub mod discord;
pub mod profile;
pub mod session;
