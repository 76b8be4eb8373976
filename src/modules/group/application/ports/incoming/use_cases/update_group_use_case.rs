use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::Course;
use crate::group::application::domain::entities::Group;
use super::create_group_use_case::GroupCommandError;

//
// ──────────────────────────────────────────────────────────
// Update Group Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct UpdateGroupCommand {
    group_id: Uuid,
    name: String,
    course: Course,
}

impl UpdateGroupCommand {
    pub fn new(group_id: Uuid, name: String, course: i16) -> Result<Self, GroupCommandError> {
        let name = name.trim();

        if name.is_empty() {
            return Err(GroupCommandError::EmptyName);
        }

        if name.len() > 100 {
            return Err(GroupCommandError::NameTooLong);
        }

        let course = Course::new(course).map_err(|_| GroupCommandError::InvalidCourse)?;

        Ok(Self {
            group_id,
            name: name.to_string(),
            course,
        })
    }

    pub fn group_id(&self) -> Uuid {
        self.group_id
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
pub enum UpdateGroupError {
    #[error("Group not found")]
    GroupNotFound,

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
pub trait UpdateGroupUseCase: Send + Sync {
    async fn execute(&self, command: UpdateGroupCommand) -> Result<Group, UpdateGroupError>;
}
