use async_trait::async_trait;

use crate::auth::application::domain::entities::Course;
use crate::group::application::domain::entities::Group;

//
// ──────────────────────────────────────────────────────────
// Create Group Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateGroupCommand {
    name: String,
    course: Course,
}

#[derive(Debug, thiserror::Error)]
pub enum GroupCommandError {
    #[error("Group name cannot be empty")]
    EmptyName,

    #[error("Group name must not exceed 100 characters")]
    NameTooLong,

    #[error("Course number must be between 1 and 4")]
    InvalidCourse,
}

impl CreateGroupCommand {
    pub fn new(name: String, course: i16) -> Result<Self, GroupCommandError> {
        let name = name.trim();

        if name.is_empty() {
            return Err(GroupCommandError::EmptyName);
        }

        if name.len() > 100 {
            return Err(GroupCommandError::NameTooLong);
        }

        let course = Course::new(course).map_err(|_| GroupCommandError::InvalidCourse)?;

        Ok(Self {
            name: name.to_string(),
            course,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn course(&self) -> Course {
        self.course
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateGroupError {
    #[error("A group with that name and course already exists")]
    GroupAlreadyExists,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateGroupUseCase: Send + Sync {
    async fn execute(&self, command: CreateGroupCommand) -> Result<Group, CreateGroupError>;
}
