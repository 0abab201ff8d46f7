//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the bot connections. Services are responsible for:
//!
//! - **Session Management**: Issuing, resolving and tearing down bot sessions
//! - **Business Logic**: Filtering, ordering and validating what Discord returns
//! - **Domain Models**: Working with domain models rather than DTOs or connection models
//!
//! Every service except the session registry borrows one `BotConnection` for the duration of
//! a request.

pub mod guild;
pub mod message;
pub mod profile;
pub mod session;

#[cfg(test)]
mod test;
