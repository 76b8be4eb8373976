use async_trait::async_trait;
use uuid::Uuid;

use crate::schedule::application::ports::{
    incoming::use_cases::{DeleteSlotError, DeleteSlotUseCase},
    outgoing::{ScheduleRepository, ScheduleRepositoryError},
};

#[derive(Debug, Clone)]
pub struct DeleteSlotService<R>
where
    R: ScheduleRepository + Send + Sync,
{
    repository: R,
}

impl<R> DeleteSlotService<R>
where
    R: ScheduleRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteSlotUseCase for DeleteSlotService<R>
where
    R: ScheduleRepository + Send + Sync,
{
    async fn execute(&self, slot_id: Uuid) -> Result<(), DeleteSlotError> {
        self.repository
            .delete_slot(slot_id)
            .await
            .map_err(|e| match e {
                ScheduleRepositoryError::SlotNotFound => DeleteSlotError::SlotNotFound,
                other => DeleteSlotError::RepositoryError(other.to_string()),
            })
    }
}
