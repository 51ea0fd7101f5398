//! Data models for Postboard entities.
//!
//! This module contains the data structures exchanged with the backend:
//!
//! - `User`: a registered user / the authenticated profile
//! - `Post`, `PostBrief`: blog posts and the trimmed form sent for summaries
//! - `Comment`: comments and replies attached to a post
//! - `AiSummary`: the AI summary endpoint's response

pub mod comment;
pub mod post;
pub mod user;

pub use comment::Comment;
pub use post::{AiSummary, Post, PostBrief};
pub use user::User;
