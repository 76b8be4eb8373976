use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteSlotError {
    #[error("Schedule slot not found")]
    SlotNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteSlotUseCase: Send + Sync {
    async fn execute(&self, slot_id: Uuid) -> Result<(), DeleteSlotError>;
}
