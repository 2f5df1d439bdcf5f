use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Comment entity - a text reply to a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: i32,
    pub comment_text: String,
    pub author_id: i32,
    pub post_id: i32,
    pub created_at: DateTime<Utc>,
}

/// Input for commenting on a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewComment {
    pub comment_text: String,
    pub author_id: i32,
    pub post_id: i32,
    pub created_at: Option<DateTime<Utc>>,
}

impl NewComment {
    pub fn new(author_id: i32, post_id: i32, text: impl Into<String>) -> Self {
        Self {
            comment_text: text.into(),
            author_id,
            post_id,
            created_at: None,
        }
    }
}
