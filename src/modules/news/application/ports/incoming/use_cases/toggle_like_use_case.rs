use async_trait::async_trait;
use uuid::Uuid;

use crate::news::application::domain::entities::LikeStatus;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ToggleLikeError {
    #[error("News post not found")]
    PostNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Likes it if the caller has not, unlikes it if they have.
#[async_trait]
pub trait ToggleLikeUseCase: Send + Sync {
    async fn execute(&self, post_id: Uuid, user_id: Uuid) -> Result<LikeStatus, ToggleLikeError>;
}
