use async_trait::async_trait;
use uuid::Uuid;

use crate::news::application::{
    domain::entities::PostSummary,
    ports::incoming::use_cases::{GetNewsFeedError, GetNewsFeedUseCase},
    ports::outgoing::NewsQuery,
};

#[derive(Debug, Clone)]
pub struct GetNewsFeedService<Q>
where
    Q: NewsQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetNewsFeedService<Q>
where
    Q: NewsQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetNewsFeedUseCase for GetNewsFeedService<Q>
where
    Q: NewsQuery + Send + Sync,
{
    async fn execute(&self, caller_id: Uuid) -> Result<Vec<PostSummary>, GetNewsFeedError> {
        self.query
            .list_posts(caller_id)
            .await
            .map_err(|e| GetNewsFeedError::QueryFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;

    use crate::news::application::domain::entities::{
        AuthorPost, Comment, NewsPost, PostDetail,
    };
    use crate::news::application::ports::outgoing::NewsQueryError;

    fn summary(title: &str) -> PostSummary {
        PostSummary {
            id: Uuid::new_v4(),
            title: title.to_string(),
            content: "body".to_string(),
            author_id: Uuid::new_v4(),
            author_name: "alice".to_string(),
            created_at: Utc::now(),
            like_count: 2,
            comment_count: 1,
            liked_by_caller: false,
        }
    }

    #[derive(Debug, Clone)]
    struct MockNewsQuery {
        feed: Result<Vec<PostSummary>, NewsQueryError>,
    }

    #[async_trait]
    impl NewsQuery for MockNewsQuery {
        async fn list_posts(&self, _caller_id: Uuid) -> Result<Vec<PostSummary>, NewsQueryError> {
            self.feed.clone()
        }

        async fn get_post(
            &self,
            _post_id: Uuid,
            _caller_id: Uuid,
        ) -> Result<Option<PostDetail>, NewsQueryError> {
            unimplemented!()
        }

        async fn find_post(&self, _post_id: Uuid) -> Result<Option<NewsPost>, NewsQueryError> {
            unimplemented!()
        }

        async fn find_comment(
            &self,
            _comment_id: Uuid,
        ) -> Result<Option<Comment>, NewsQueryError> {
            unimplemented!()
        }

        async fn list_author_posts(
            &self,
            _author_id: Uuid,
        ) -> Result<Vec<AuthorPost>, NewsQueryError> {
            unimplemented!()
        }
    }

    #[tokio::test]
    async fn the_feed_keeps_query_order() {
        // Arrange
        let feed = vec![summary("newest"), summary("older")];
        let service = GetNewsFeedService::new(MockNewsQuery {
            feed: Ok(feed.clone()),
        });

        // Act
        let result = service.execute(Uuid::new_v4()).await;

        // Assert
        assert_eq!(result.unwrap(), feed);
    }

    #[tokio::test]
    async fn query_failure_is_surfaced() {
        // Arrange
        let service = GetNewsFeedService::new(MockNewsQuery {
            feed: Err(NewsQueryError::DatabaseError("pool timeout".to_string())),
        });

        // Act
        let result = service.execute(Uuid::new_v4()).await;

        // Assert
        assert!(matches!(result, Err(GetNewsFeedError::QueryFailed(_))));
    }
}
