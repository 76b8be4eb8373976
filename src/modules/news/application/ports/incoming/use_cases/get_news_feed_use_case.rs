use async_trait::async_trait;
use uuid::Uuid;

use crate::news::application::domain::entities::PostSummary;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetNewsFeedError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetNewsFeedUseCase: Send + Sync {
    async fn execute(&self, caller_id: Uuid) -> Result<Vec<PostSummary>, GetNewsFeedError>;
}
