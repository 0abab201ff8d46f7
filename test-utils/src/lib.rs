//! Botpanel Test Utils
//!
//! Provides shared testing utilities for the botpanel workspace. Instead of logging into Discord,
//! tests run against an in-memory fake of the `connection` crate's traits whose remote state can
//! be seeded up front and inspected afterwards.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder registering fake bots under bot tokens
//! - **TestContext**: Test environment holding the fake connector and the registered bots
//! - **fake**: `FakeConnector`, `FakeConnection` and `FakeBot`, the in-memory Discord stand-in
//! - **fixture**: Plain guild, channel and permission values for seeding fake bots
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, fake::FakeBot, fixture};
//!
//! #[tokio::test]
//! async fn test_login() {
//!     let bot = FakeBot::builder(1000, "TestBot")
//!         .guild(
//!             fixture::guild(1, "Alpha"),
//!             vec![fixture::text_channel(11, "general", fixture::permission::SEND)],
//!         )
//!         .build();
//!
//!     let test = TestBuilder::new().with_bot("TOKEN", bot).build();
//!
//!     // Hand `test.connector()` to the code under test...
//! }
//! ```

pub mod builder;
pub mod context;
pub mod fake;
pub mod fixture;
