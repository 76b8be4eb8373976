use async_trait::async_trait;
use uuid::Uuid;

use crate::subject::application::domain::entities::Subject;

#[derive(Debug, Clone)]
pub struct CreateSubjectData {
    pub name: String,
    pub teacher_ids: Vec<Uuid>,
}

#[derive(Debug, Clone)]
pub struct UpdateSubjectData {
    pub subject_id: Uuid,
    pub name: String,
    pub teacher_ids: Vec<Uuid>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SubjectRepositoryError {
    #[error("A subject with that name already exists")]
    SubjectAlreadyExists,

    #[error("Subject not found")]
    SubjectNotFound,

    #[error("Subject is still used by schedule slots")]
    SubjectInUse,

    #[error("Teacher not found")]
    TeacherNotFound,

    #[error("Referenced identity is not a teacher")]
    NotATeacher,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Writes validate every referenced teacher (exists, role=teacher) and
/// run together with the assignment-set changes in one transaction.
#[async_trait]
pub trait SubjectRepository: Send + Sync {
    async fn create_subject(
        &self,
        data: CreateSubjectData,
    ) -> Result<Subject, SubjectRepositoryError>;

    /// Replaces the whole teacher assignment set with `teacher_ids`.
    async fn update_subject(
        &self,
        data: UpdateSubjectData,
    ) -> Result<Subject, SubjectRepositoryError>;

    /// Refused while schedule slots still reference the subject. Teacher
    /// assignments are dropped together with the subject.
    async fn delete_subject(&self, subject_id: Uuid) -> Result<(), SubjectRepositoryError>;
}
