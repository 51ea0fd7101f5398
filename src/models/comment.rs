use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A comment on a post.
///
/// `userId` identifies the author for ownership checks; `replyToId` is
/// set when the comment answers another comment rather than the post
/// itself. `createdAt` is an instant with timezone, unlike a post's
/// zoneless `createdAt`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    #[serde(rename = "userId")]
    pub user_id: i64,
    pub username: String,
    #[serde(rename = "replyToId", default, skip_serializing_if = "Option::is_none")]
    pub reply_to_id: Option<i64>,
    pub text: String,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Comment {
    /// Whether this comment replies to another comment.
    pub fn is_reply(&self) -> bool {
        self.reply_to_id.is_some()
    }
}
