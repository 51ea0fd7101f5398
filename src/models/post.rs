use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A blog post as stored by the backend.
///
/// `createdAt` and `views` are filled in server-side; they default here
/// because create/search payloads may omit them. The backend emits
/// `createdAt` as a zoneless ISO timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub views: i32,
}

/// The trimmed post form sent to the AI summary endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostBrief {
    pub title: String,
    pub excerpt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiSummary {
    pub summary: String,
}

impl Post {
    /// A brief suitable for the AI summary endpoint, with the content
    /// truncated to `max_excerpt` characters.
    pub fn to_brief(&self, max_excerpt: usize) -> PostBrief {
        PostBrief {
            title: self.title.clone(),
            excerpt: self.content.chars().take(max_excerpt).collect(),
        }
    }
}
