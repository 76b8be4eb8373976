use async_trait::async_trait;

use crate::group::application::{
    domain::entities::Group,
    ports::incoming::use_cases::{UpdateGroupCommand, UpdateGroupError, UpdateGroupUseCase},
    ports::outgoing::{GroupRepository, GroupRepositoryError, UpdateGroupData},
};

#[derive(Debug, Clone)]
pub struct UpdateGroupService<R>
where
    R: GroupRepository + Send + Sync,
{
    repository: R,
}

impl<R> UpdateGroupService<R>
where
    R: GroupRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateGroupUseCase for UpdateGroupService<R>
where
    R: GroupRepository + Send + Sync,
{
    async fn execute(&self, command: UpdateGroupCommand) -> Result<Group, UpdateGroupError> {
        let data = UpdateGroupData {
            group_id: command.group_id(),
            name: command.name().to_string(),
            course: command.course(),
        };

        self.repository.update_group(data).await.map_err(|e| match e {
            GroupRepositoryError::GroupNotFound => UpdateGroupError::GroupNotFound,
            GroupRepositoryError::GroupAlreadyExists => UpdateGroupError::GroupAlreadyExists,
            other => UpdateGroupError::RepositoryError(other.to_string()),
        })
    }
}
