use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::Role;
use crate::news::application::{
    domain::ownership::may_modify_post,
    ports::incoming::use_cases::{DeletePostError, DeletePostUseCase},
    ports::outgoing::{NewsQuery, NewsRepository, NewsRepositoryError},
};

#[derive(Debug, Clone)]
pub struct DeletePostService<Q, R>
where
    Q: NewsQuery + Send + Sync,
    R: NewsRepository + Send + Sync,
{
    query: Q,
    repository: R,
}

impl<Q, R> DeletePostService<Q, R>
where
    Q: NewsQuery + Send + Sync,
    R: NewsRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> DeletePostUseCase for DeletePostService<Q, R>
where
    Q: NewsQuery + Send + Sync,
    R: NewsRepository + Send + Sync,
{
    async fn execute(
        &self,
        post_id: Uuid,
        caller_id: Uuid,
        caller_role: Role,
    ) -> Result<(), DeletePostError> {
        let post = self
            .query
            .find_post(post_id)
            .await
            .map_err(|e| DeletePostError::RepositoryError(e.to_string()))?
            .ok_or(DeletePostError::PostNotFound)?;

        if !may_modify_post(post.author_id, caller_id, caller_role) {
            return Err(DeletePostError::Forbidden);
        }

        self.repository
            .delete_post(post_id)
            .await
            .map_err(|e| match e {
                NewsRepositoryError::PostNotFound => DeletePostError::PostNotFound,
                other => DeletePostError::RepositoryError(other.to_string()),
            })
    }
}
