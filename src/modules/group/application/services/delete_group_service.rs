use async_trait::async_trait;
use uuid::Uuid;

use crate::group::application::ports::{
    incoming::use_cases::{DeleteGroupError, DeleteGroupUseCase},
    outgoing::{GroupRepository, GroupRepositoryError},
};

#[derive(Debug, Clone)]
pub struct DeleteGroupService<R>
where
    R: GroupRepository + Send + Sync,
{
    repository: R,
}

impl<R> DeleteGroupService<R>
where
    R: GroupRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteGroupUseCase for DeleteGroupService<R>
where
    R: GroupRepository + Send + Sync,
{
    async fn execute(&self, group_id: Uuid) -> Result<(), DeleteGroupError> {
        self.repository
            .delete_group(group_id)
            .await
            .map_err(|e| match e {
                GroupRepositoryError::GroupNotFound => DeleteGroupError::GroupNotFound,
                GroupRepositoryError::GroupInUse => DeleteGroupError::GroupInUse,
                other => DeleteGroupError::RepositoryError(other.to_string()),
            })
    }
}
