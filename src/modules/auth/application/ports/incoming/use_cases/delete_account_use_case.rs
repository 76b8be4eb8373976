use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteAccountError {
    #[error("User not found")]
    UserNotFound,

    #[error("Account is still assigned to schedule slots")]
    TeacherInSchedule,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Self-service account removal. One transaction deletes the user's likes,
/// comments, their posts with every comment and like on them, and finally
/// the user row; the stored photo and outstanding tokens go with it.
#[async_trait]
pub trait DeleteAccountUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid) -> Result<(), DeleteAccountError>;
}
