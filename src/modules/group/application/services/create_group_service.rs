use async_trait::async_trait;

use crate::group::application::{
    domain::entities::Group,
    ports::incoming::use_cases::{CreateGroupCommand, CreateGroupError, CreateGroupUseCase},
    ports::outgoing::{CreateGroupData, GroupRepository, GroupRepositoryError},
};

#[derive(Debug, Clone)]
pub struct CreateGroupService<R>
where
    R: GroupRepository + Send + Sync,
{
    repository: R,
}

impl<R> CreateGroupService<R>
where
    R: GroupRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateGroupUseCase for CreateGroupService<R>
where
    R: GroupRepository + Send + Sync,
{
    async fn execute(&self, command: CreateGroupCommand) -> Result<Group, CreateGroupError> {
        let data = CreateGroupData {
            name: command.name().to_string(),
            course: command.course(),
        };

        self.repository.create_group(data).await.map_err(|e| match e {
            GroupRepositoryError::GroupAlreadyExists => CreateGroupError::GroupAlreadyExists,
            other => CreateGroupError::RepositoryError(other.to_string()),
        })
    }
}
