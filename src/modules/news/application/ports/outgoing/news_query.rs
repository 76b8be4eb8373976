use async_trait::async_trait;
use uuid::Uuid;

use crate::news::application::domain::entities::{
    AuthorPost, Comment, NewsPost, PostDetail, PostSummary,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum NewsQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait NewsQuery: Send + Sync {
    /// Feed rows newest first, with `liked_by_caller` resolved for
    /// `caller_id`.
    async fn list_posts(&self, caller_id: Uuid) -> Result<Vec<PostSummary>, NewsQueryError>;

    /// Detail with comments oldest first, or None for an unknown post.
    async fn get_post(
        &self,
        post_id: Uuid,
        caller_id: Uuid,
    ) -> Result<Option<PostDetail>, NewsQueryError>;

    /// Raw row, used for ownership checks before a write.
    async fn find_post(&self, post_id: Uuid) -> Result<Option<NewsPost>, NewsQueryError>;

    async fn find_comment(&self, comment_id: Uuid) -> Result<Option<Comment>, NewsQueryError>;

    /// An author's own posts newest first, for the profile page.
    async fn list_author_posts(&self, author_id: Uuid)
        -> Result<Vec<AuthorPost>, NewsQueryError>;
}
