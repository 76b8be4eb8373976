use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteGroupError {
    #[error("Group not found")]
    GroupNotFound,

    #[error("Group still has students or schedule slots")]
    GroupInUse,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Deleting a group is refused while students or slots still point at it;
/// nothing is removed implicitly.
#[async_trait]
pub trait DeleteGroupUseCase: Send + Sync {
    async fn execute(&self, group_id: Uuid) -> Result<(), DeleteGroupError>;
}
