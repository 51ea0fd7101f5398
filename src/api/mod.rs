//! REST API client module for the Postboard backend.
//!
//! This module provides the `ApiClient` for communicating with the
//! Postboard API to fetch users and posts, verify credentials, and
//! request AI summaries.
//!
//! The API uses HTTP Basic authentication. Credentials are attached
//! per-request from the client's own state rather than through any
//! process-wide default.

pub mod client;
pub mod error;

pub use client::ApiClient;
pub use error::ApiError;
