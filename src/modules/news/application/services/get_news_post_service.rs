use async_trait::async_trait;
use uuid::Uuid;

use crate::news::application::{
    domain::entities::PostDetail,
    ports::incoming::use_cases::{GetNewsPostError, GetNewsPostUseCase},
    ports::outgoing::NewsQuery,
};

#[derive(Debug, Clone)]
pub struct GetNewsPostService<Q>
where
    Q: NewsQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetNewsPostService<Q>
where
    Q: NewsQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetNewsPostUseCase for GetNewsPostService<Q>
where
    Q: NewsQuery + Send + Sync,
{
    async fn execute(
        &self,
        post_id: Uuid,
        caller_id: Uuid,
    ) -> Result<PostDetail, GetNewsPostError> {
        self.query
            .get_post(post_id, caller_id)
            .await
            .map_err(|e| GetNewsPostError::QueryFailed(e.to_string()))?
            .ok_or(GetNewsPostError::PostNotFound)
    }
}
