use async_trait::async_trait;

use crate::subject::application::domain::entities::SubjectWithTeachers;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SubjectQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait SubjectQuery: Send + Sync {
    /// All subjects ordered by name, each with its assigned teachers.
    async fn list_subjects(&self) -> Result<Vec<SubjectWithTeachers>, SubjectQueryError>;
}
