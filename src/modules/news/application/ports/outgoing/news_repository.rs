use async_trait::async_trait;
use uuid::Uuid;

use crate::news::application::domain::entities::{Comment, LikeStatus, NewsPost};

#[derive(Debug, Clone)]
pub struct CreatePostData {
    pub author_id: Uuid,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone)]
pub struct UpdatePostData {
    pub post_id: Uuid,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone)]
pub struct CreateCommentData {
    pub post_id: Uuid,
    pub author_id: Uuid,
    pub content: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum NewsRepositoryError {
    #[error("News post not found")]
    PostNotFound,

    #[error("Comment not found")]
    CommentNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Ownership rules live in the services; by the time a call lands here
/// the caller is already allowed to perform it.
#[async_trait]
pub trait NewsRepository: Send + Sync {
    async fn create_post(&self, data: CreatePostData) -> Result<NewsPost, NewsRepositoryError>;

    async fn update_post(&self, data: UpdatePostData) -> Result<NewsPost, NewsRepositoryError>;

    /// Removes the post; its comment and like rows go with it.
    async fn delete_post(&self, post_id: Uuid) -> Result<(), NewsRepositoryError>;

    async fn create_comment(
        &self,
        data: CreateCommentData,
    ) -> Result<Comment, NewsRepositoryError>;

    async fn delete_comment(&self, comment_id: Uuid) -> Result<(), NewsRepositoryError>;

    /// Guarded insert-or-delete on the (post_id, user_id) pair, so two
    /// racing toggles can never leave a duplicate like behind.
    async fn toggle_like(
        &self,
        post_id: Uuid,
        user_id: Uuid,
    ) -> Result<LikeStatus, NewsRepositoryError>;
}
