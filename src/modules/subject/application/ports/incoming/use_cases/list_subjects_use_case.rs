use async_trait::async_trait;

use crate::subject::application::domain::entities::SubjectWithTeachers;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListSubjectsError {
    #[error("Failed to fetch subjects: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait ListSubjectsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<SubjectWithTeachers>, ListSubjectsError>;
}
