//! HTTP backend for remotely controlling Discord bot accounts.
//!
//! Clients log a bot in with its token and receive a session id. Every other endpoint takes
//! that session id as its first path segment and acts through the bot's live gateway
//! connection.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Session registry and business logic over a bot connection
//! - **Model Layer** (`model/`) - Domain models and validated parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state holding the session registry
//! - **Startup** (`startup`) - Tracing setup, serving and graceful shutdown
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Controller** resolves the session, converts DTOs to params, calls service
//! 3. **Service** performs remote operations through the session's `BotConnection`
//! 4. **Controller** converts domain models to DTOs and returns the HTTP response

pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
