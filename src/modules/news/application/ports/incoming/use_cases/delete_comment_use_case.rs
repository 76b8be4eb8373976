use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::Role;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteCommentError {
    #[error("Comment not found")]
    CommentNotFound,

    #[error("Only the comment author, the post author or an admin may delete this comment")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteCommentUseCase: Send + Sync {
    /// `post_id` scopes the lookup; a comment id under the wrong post
    /// is treated as not found.
    async fn execute(
        &self,
        post_id: Uuid,
        comment_id: Uuid,
        caller_id: Uuid,
        caller_role: Role,
    ) -> Result<(), DeleteCommentError>;
}
