use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Post entity - content published by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i32,
    pub user_id: i32,
    pub caption: Option<String>,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Input for publishing a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPost {
    pub user_id: i32,
    pub caption: Option<String>,
    pub location: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl NewPost {
    pub fn new(user_id: i32) -> Self {
        Self {
            user_id,
            caption: None,
            location: None,
            created_at: None,
        }
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}
