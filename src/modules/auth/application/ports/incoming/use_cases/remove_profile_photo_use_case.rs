use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum RemoveProfilePhotoError {
    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Clears the user's photo reference and deletes the stored file.
/// Removing when no photo is set is a no-op success.
#[async_trait]
pub trait RemoveProfilePhotoUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid) -> Result<(), RemoveProfilePhotoError>;
}
