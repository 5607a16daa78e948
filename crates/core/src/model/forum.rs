use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{PostId, ReplyId};

/// A top-level community forum post. Replies are fetched lazily and kept
/// outside the post itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForumPost {
    pub id: PostId,
    pub author: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForumReply {
    pub id: ReplyId,
    pub author: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}
