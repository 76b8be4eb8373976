use async_trait::async_trait;
use uuid::Uuid;

use crate::news::application::{
    domain::entities::LikeStatus,
    ports::incoming::use_cases::{ToggleLikeError, ToggleLikeUseCase},
    ports::outgoing::{NewsRepository, NewsRepositoryError},
};

#[derive(Debug, Clone)]
pub struct ToggleLikeService<R>
where
    R: NewsRepository + Send + Sync,
{
    repository: R,
}

impl<R> ToggleLikeService<R>
where
    R: NewsRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ToggleLikeUseCase for ToggleLikeService<R>
where
    R: NewsRepository + Send + Sync,
{
    async fn execute(&self, post_id: Uuid, user_id: Uuid) -> Result<LikeStatus, ToggleLikeError> {
        self.repository
            .toggle_like(post_id, user_id)
            .await
            .map_err(|e| match e {
                NewsRepositoryError::PostNotFound => ToggleLikeError::PostNotFound,
                other => ToggleLikeError::RepositoryError(other.to_string()),
            })
    }
}
