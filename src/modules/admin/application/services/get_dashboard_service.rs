use async_trait::async_trait;

use crate::admin::application::{
    domain::entities::Dashboard,
    ports::incoming::use_cases::{GetDashboardError, GetDashboardUseCase},
    ports::outgoing::DashboardQuery,
};
use crate::auth::application::ports::outgoing::UserQuery;

const LATEST_POSTS: u64 = 5;

/// Composes the counting query with the pending-registration list the
/// auth module already serves.
#[derive(Debug, Clone)]
pub struct GetDashboardService<D, U>
where
    D: DashboardQuery + Send + Sync,
    U: UserQuery + Send + Sync,
{
    dashboard_query: D,
    user_query: U,
}

impl<D, U> GetDashboardService<D, U>
where
    D: DashboardQuery + Send + Sync,
    U: UserQuery + Send + Sync,
{
    pub fn new(dashboard_query: D, user_query: U) -> Self {
        Self {
            dashboard_query,
            user_query,
        }
    }
}

#[async_trait]
impl<D, U> GetDashboardUseCase for GetDashboardService<D, U>
where
    D: DashboardQuery + Send + Sync,
    U: UserQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Dashboard, GetDashboardError> {
        let counts = self
            .dashboard_query
            .fetch_counts()
            .await
            .map_err(|e| GetDashboardError::QueryFailed(e.to_string()))?;

        let pending_registrations = self
            .user_query
            .list_pending()
            .await
            .map_err(|e| GetDashboardError::QueryFailed(e.to_string()))?;

        let latest_posts = self
            .dashboard_query
            .latest_posts(LATEST_POSTS)
            .await
            .map_err(|e| GetDashboardError::QueryFailed(e.to_string()))?;

        Ok(Dashboard {
            counts,
            pending_registrations,
            latest_posts,
        })
    }
}
