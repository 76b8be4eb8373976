use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::Role;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeletePostError {
    #[error("News post not found")]
    PostNotFound,

    #[error("Only the author or an admin may modify this post")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeletePostUseCase: Send + Sync {
    async fn execute(
        &self,
        post_id: Uuid,
        caller_id: Uuid,
        caller_role: Role,
    ) -> Result<(), DeletePostError>;
}
