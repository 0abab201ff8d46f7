//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer and the validated
//! parameter types controllers build from request DTOs. Domain models are converted from
//! connection models at the service boundary and transformed to DTOs at the controller
//! boundary.

pub mod guild;
pub mod message;
pub mod profile;
pub mod session;
