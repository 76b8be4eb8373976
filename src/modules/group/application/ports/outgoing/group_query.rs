use async_trait::async_trait;
use uuid::Uuid;

use crate::group::application::domain::entities::Group;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GroupQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait GroupQuery: Send + Sync {
    /// All groups ordered by course, then name. Shown on the public
    /// registration form as well as the admin screens.
    async fn list_groups(&self) -> Result<Vec<Group>, GroupQueryError>;

    async fn find_by_id(&self, group_id: Uuid) -> Result<Option<Group>, GroupQueryError>;
}
