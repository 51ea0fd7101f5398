//! Authentication module for managing the login session.
//!
//! This module provides:
//! - `Credentials`: the username/password pair, held in memory only
//! - `Session`: login coordination and the session's derived state
//!
//! There is no credential persistence: credentials live for the duration
//! of the process and are never written to disk.

pub mod credentials;
pub mod session;

pub use credentials::Credentials;
pub use session::Session;
