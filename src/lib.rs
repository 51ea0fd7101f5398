//! Postboard client - a typed Rust client for the Postboard blog API.
//!
//! This crate provides three pieces:
//! - `ApiClient`: typed wrappers for the Postboard REST endpoints
//! - `Session`: login coordination and in-memory session state
//! - `router`: the route table and authentication guard
//!
//! Authentication is HTTP Basic. Credentials are verified once against the
//! `/secured/` endpoint, then carried on every subsequent request by a
//! credentialed clone of the client. Nothing is persisted to disk except the
//! optional client configuration.

pub mod api;
pub mod auth;
pub mod config;
pub mod models;
pub mod router;

pub use api::{ApiClient, ApiError};
pub use auth::{Credentials, Session};
pub use config::Config;
pub use models::{AiSummary, Comment, Post, PostBrief, User};
pub use router::{resolve, Navigation, Route};
