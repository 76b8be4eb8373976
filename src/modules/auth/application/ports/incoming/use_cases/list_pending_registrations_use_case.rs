use async_trait::async_trait;

use crate::auth::application::domain::entities::User;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListPendingRegistrationsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// The admin review queue: registrations still pending, oldest first.
#[async_trait]
pub trait ListPendingRegistrationsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<User>, ListPendingRegistrationsError>;
}
