use async_trait::async_trait;

use crate::group::application::domain::entities::Group;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListGroupsError {
    #[error("Failed to fetch groups: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait ListGroupsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Group>, ListGroupsError>;
}
