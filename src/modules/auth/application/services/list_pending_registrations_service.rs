use async_trait::async_trait;

use crate::auth::application::domain::entities::User;
use crate::auth::application::ports::{
    incoming::use_cases::{ListPendingRegistrationsError, ListPendingRegistrationsUseCase},
    outgoing::UserQuery,
};

#[derive(Debug, Clone)]
pub struct ListPendingRegistrationsService<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListPendingRegistrationsService<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListPendingRegistrationsUseCase for ListPendingRegistrationsService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<User>, ListPendingRegistrationsError> {
        self.query
            .list_pending()
            .await
            .map_err(|e| ListPendingRegistrationsError::RepositoryError(e.to_string()))
    }
}
