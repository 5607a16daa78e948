use std::sync::Arc;

use api::VitaApi;
use vita_core::model::{AuthSession, ForumPost, ForumReply, PostId};

use crate::error::ForumError;

/// Community forum posts and replies.
#[derive(Clone)]
pub struct ForumService {
    api: Arc<dyn VitaApi>,
}

impl ForumService {
    #[must_use]
    pub fn new(api: Arc<dyn VitaApi>) -> Self {
        Self { api }
    }

    /// All posts, newest first. Replies are not included; fetch them lazily
    /// per post with [`ForumService::replies`].
    ///
    /// # Errors
    ///
    /// Returns `ForumError::Api` when the request fails.
    pub async fn posts(&self, session: &AuthSession) -> Result<Vec<ForumPost>, ForumError> {
        let posts = self.api.forum_posts(session).await?;
        Ok(posts)
    }

    /// # Errors
    ///
    /// Returns `ForumError::EmptyContent` for a blank message (no request is
    /// issued), `ForumError::Api` when the server rejects it.
    pub async fn create_post(
        &self,
        session: &AuthSession,
        content: &str,
    ) -> Result<ForumPost, ForumError> {
        let content = content.trim();
        if content.is_empty() {
            return Err(ForumError::EmptyContent);
        }
        let post = self.api.create_forum_post(session, content).await?;
        Ok(post)
    }

    /// # Errors
    ///
    /// Returns `ForumError::Api` when the request fails.
    pub async fn replies(
        &self,
        session: &AuthSession,
        post_id: &PostId,
    ) -> Result<Vec<ForumReply>, ForumError> {
        let replies = self.api.forum_replies(session, post_id).await?;
        Ok(replies)
    }

    /// # Errors
    ///
    /// Returns `ForumError::EmptyContent` for a blank reply (no request is
    /// issued), `ForumError::Api` when the server rejects it.
    pub async fn create_reply(
        &self,
        session: &AuthSession,
        post_id: &PostId,
        content: &str,
    ) -> Result<ForumReply, ForumError> {
        let content = content.trim();
        if content.is_empty() {
            return Err(ForumError::EmptyContent);
        }
        let reply = self.api.create_forum_reply(session, post_id, content).await?;
        Ok(reply)
    }
}
