use async_trait::async_trait;

use crate::admin::application::domain::entities::{PortalCounts, RecentPost};

#[derive(Debug, Clone, thiserror::Error)]
pub enum DashboardQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait DashboardQuery: Send + Sync {
    async fn fetch_counts(&self) -> Result<PortalCounts, DashboardQueryError>;

    /// Newest posts first, at most `limit` rows.
    async fn latest_posts(&self, limit: u64) -> Result<Vec<RecentPost>, DashboardQueryError>;
}
