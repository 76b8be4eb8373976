use async_trait::async_trait;
use uuid::Uuid;

use crate::subject::application::domain::entities::Subject;

//
// ──────────────────────────────────────────────────────────
// Create Subject Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateSubjectCommand {
    name: String,
    teacher_ids: Vec<Uuid>,
}

#[derive(Debug, thiserror::Error)]
pub enum SubjectCommandError {
    #[error("Subject name cannot be empty")]
    EmptyName,

    #[error("Subject name must not exceed 100 characters")]
    NameTooLong,
}

impl CreateSubjectCommand {
    pub fn new(name: String, mut teacher_ids: Vec<Uuid>) -> Result<Self, SubjectCommandError> {
        let name = name.trim();

        if name.is_empty() {
            return Err(SubjectCommandError::EmptyName);
        }

        if name.len() > 100 {
            return Err(SubjectCommandError::NameTooLong);
        }

        // The assignment is a set; repeated ids collapse to one.
        teacher_ids.sort_unstable();
        teacher_ids.dedup();

        Ok(Self {
            name: name.to_string(),
            teacher_ids,
        })
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
pub enum CreateSubjectError {
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
pub trait CreateSubjectUseCase: Send + Sync {
    async fn execute(&self, command: CreateSubjectCommand) -> Result<Subject, CreateSubjectError>;
}
