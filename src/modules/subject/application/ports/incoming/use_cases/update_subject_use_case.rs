use async_trait::async_trait;
use uuid::Uuid;

use super::create_subject_use_case::SubjectCommandError;
use crate::subject::application::domain::entities::Subject;

//
// ──────────────────────────────────────────────────────────
// Update Subject Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct UpdateSubjectCommand {
    subject_id: Uuid,
    name: String,
    teacher_ids: Vec<Uuid>,
}

impl UpdateSubjectCommand {
    pub fn new(
        subject_id: Uuid,
        name: String,
        mut teacher_ids: Vec<Uuid>,
    ) -> Result<Self, SubjectCommandError> {
        let name = name.trim();

        if name.is_empty() {
            return Err(SubjectCommandError::EmptyName);
        }

        if name.len() > 100 {
            return Err(SubjectCommandError::NameTooLong);
        }

        teacher_ids.sort_unstable();
        teacher_ids.dedup();

        Ok(Self {
            subject_id,
            name: name.to_string(),
            teacher_ids,
        })
    }

    pub fn subject_id(&self) -> Uuid {
        self.subject_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn teacher_ids(&self) -> &[Uuid] {
        &self.teacher_ids
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateSubjectError {
    #[error("Subject not found")]
    SubjectNotFound,

    #[error("A subject with that name already exists")]
    SubjectAlreadyExists,

    #[error("Teacher not found")]
    TeacherNotFound,

    #[error("Referenced identity is not a teacher")]
    NotATeacher,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait UpdateSubjectUseCase: Send + Sync {
    async fn execute(&self, command: UpdateSubjectCommand) -> Result<Subject, UpdateSubjectError>;
}
