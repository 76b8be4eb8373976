use async_trait::async_trait;
use uuid::Uuid;

use crate::news::application::domain::entities::PostDetail;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetNewsPostError {
    #[error("News post not found")]
    PostNotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetNewsPostUseCase: Send + Sync {
    async fn execute(&self, post_id: Uuid, caller_id: Uuid)
        -> Result<PostDetail, GetNewsPostError>;
}
