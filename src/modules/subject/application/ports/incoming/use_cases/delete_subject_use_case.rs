use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteSubjectError {
    #[error("Subject not found")]
    SubjectNotFound,

    #[error("Subject is still used by schedule slots")]
    SubjectInUse,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteSubjectUseCase: Send + Sync {
    async fn execute(&self, subject_id: Uuid) -> Result<(), DeleteSubjectError>;
}
