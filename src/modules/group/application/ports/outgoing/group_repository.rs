use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::Course;
use crate::group::application::domain::entities::Group;

#[derive(Debug, Clone)]
pub struct CreateGroupData {
    pub name: String,
    pub course: Course,
}

#[derive(Debug, Clone)]
pub struct UpdateGroupData {
    pub group_id: Uuid,
    pub name: String,
    pub course: Course,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum GroupRepositoryError {
    #[error("A group with that name and course already exists")]
    GroupAlreadyExists,

    #[error("Group not found")]
    GroupNotFound,

    #[error("Group still has students or schedule slots")]
    GroupInUse,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait GroupRepository: Send + Sync {
    async fn create_group(&self, data: CreateGroupData) -> Result<Group, GroupRepositoryError>;

    async fn update_group(&self, data: UpdateGroupData) -> Result<Group, GroupRepositoryError>;

    /// Fails with GroupInUse while any student or slot still references
    /// the group; members must be moved or removed first.
    async fn delete_group(&self, group_id: Uuid) -> Result<(), GroupRepositoryError>;
}
