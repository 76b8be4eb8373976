use async_trait::async_trait;

use crate::admin::application::domain::entities::Dashboard;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetDashboardError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetDashboardUseCase: Send + Sync {
    async fn execute(&self) -> Result<Dashboard, GetDashboardError>;
}
