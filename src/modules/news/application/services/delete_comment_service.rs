use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::Role;
use crate::news::application::{
    domain::ownership::may_delete_comment,
    ports::incoming::use_cases::{DeleteCommentError, DeleteCommentUseCase},
    ports::outgoing::{NewsQuery, NewsRepository, NewsRepositoryError},
};

#[derive(Debug, Clone)]
pub struct DeleteCommentService<Q, R>
where
    Q: NewsQuery + Send + Sync,
    R: NewsRepository + Send + Sync,
{
    query: Q,
    repository: R,
}

impl<Q, R> DeleteCommentService<Q, R>
where
    Q: NewsQuery + Send + Sync,
    R: NewsRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> DeleteCommentUseCase for DeleteCommentService<Q, R>
where
    Q: NewsQuery + Send + Sync,
    R: NewsRepository + Send + Sync,
{
    async fn execute(
        &self,
        post_id: Uuid,
        comment_id: Uuid,
        caller_id: Uuid,
        caller_role: Role,
    ) -> Result<(), DeleteCommentError> {
        let comment = self
            .query
            .find_comment(comment_id)
            .await
            .map_err(|e| DeleteCommentError::RepositoryError(e.to_string()))?
            .filter(|c| c.post_id == post_id)
            .ok_or(DeleteCommentError::CommentNotFound)?;

        // The post author may moderate comments under their post.
        let post_author_id = self
            .query
            .find_post(comment.post_id)
            .await
            .map_err(|e| DeleteCommentError::RepositoryError(e.to_string()))?
            .map(|p| p.author_id)
            .ok_or(DeleteCommentError::CommentNotFound)?;

        if !may_delete_comment(comment.author_id, post_author_id, caller_id, caller_role) {
            return Err(DeleteCommentError::Forbidden);
        }

        self.repository
            .delete_comment(comment_id)
            .await
            .map_err(|e| match e {
                NewsRepositoryError::CommentNotFound => DeleteCommentError::CommentNotFound,
                other => DeleteCommentError::RepositoryError(other.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;
    use std::sync::{Arc, Mutex};

    use crate::news::application::domain::entities::{
        AuthorPost, Comment, LikeStatus, NewsPost, PostDetail, PostSummary,
    };
    use crate::news::application::ports::outgoing::{
        CreateCommentData, CreatePostData, NewsQueryError, UpdatePostData,
    };

    struct Fixture {
        post: NewsPost,
        comment: Comment,
    }

    impl Fixture {
        fn new() -> Self {
            let now = Utc::now();
            let post = NewsPost {
                id: Uuid::new_v4(),
                title: "Sports day".to_string(),
                content: "Friday".to_string(),
                author_id: Uuid::new_v4(),
                created_at: now,
                updated_at: now,
            };
            let comment = Comment {
                id: Uuid::new_v4(),
                post_id: post.id,
                author_id: Uuid::new_v4(),
                content: "Can we bring guests?".to_string(),
                created_at: now,
            };
            Self { post, comment }
        }
    }

    #[derive(Debug, Clone)]
    struct MockNewsQuery {
        post: Option<NewsPost>,
        comment: Option<Comment>,
    }

    #[async_trait]
    impl NewsQuery for MockNewsQuery {
        async fn list_posts(&self, _caller_id: Uuid) -> Result<Vec<PostSummary>, NewsQueryError> {
            unimplemented!()
        }

        async fn get_post(
            &self,
            _post_id: Uuid,
            _caller_id: Uuid,
        ) -> Result<Option<PostDetail>, NewsQueryError> {
            unimplemented!()
        }

        async fn find_post(&self, _post_id: Uuid) -> Result<Option<NewsPost>, NewsQueryError> {
            Ok(self.post.clone())
        }

        async fn find_comment(
            &self,
            _comment_id: Uuid,
        ) -> Result<Option<Comment>, NewsQueryError> {
            Ok(self.comment.clone())
        }

        async fn list_author_posts(
            &self,
            _author_id: Uuid,
        ) -> Result<Vec<AuthorPost>, NewsQueryError> {
            unimplemented!()
        }
    }

    #[derive(Debug, Clone, Default)]
    struct MockNewsRepository {
        deleted: Arc<Mutex<Vec<Uuid>>>,
    }

    #[async_trait]
    impl NewsRepository for MockNewsRepository {
        async fn create_post(
            &self,
            _data: CreatePostData,
        ) -> Result<NewsPost, NewsRepositoryError> {
            unimplemented!()
        }

        async fn update_post(
            &self,
            _data: UpdatePostData,
        ) -> Result<NewsPost, NewsRepositoryError> {
            unimplemented!()
        }

        async fn delete_post(&self, _post_id: Uuid) -> Result<(), NewsRepositoryError> {
            unimplemented!()
        }

        async fn create_comment(
            &self,
            _data: CreateCommentData,
        ) -> Result<Comment, NewsRepositoryError> {
            unimplemented!()
        }

        async fn delete_comment(&self, comment_id: Uuid) -> Result<(), NewsRepositoryError> {
            self.deleted.lock().unwrap().push(comment_id);
            Ok(())
        }

        async fn toggle_like(
            &self,
            _post_id: Uuid,
            _user_id: Uuid,
        ) -> Result<LikeStatus, NewsRepositoryError> {
            unimplemented!()
        }
    }

    fn service_for(
        fixture: &Fixture,
    ) -> (
        DeleteCommentService<MockNewsQuery, MockNewsRepository>,
        Arc<Mutex<Vec<Uuid>>>,
    ) {
        let repository = MockNewsRepository::default();
        let deleted = repository.deleted.clone();
        let service = DeleteCommentService::new(
            MockNewsQuery {
                post: Some(fixture.post.clone()),
                comment: Some(fixture.comment.clone()),
            },
            repository,
        );
        (service, deleted)
    }

    #[tokio::test]
    async fn the_comment_author_deletes_it() {
        // Arrange
        let fixture = Fixture::new();
        let (service, deleted) = service_for(&fixture);

        // Act
        let result = service
            .execute(
                fixture.post.id,
                fixture.comment.id,
                fixture.comment.author_id,
                Role::Student,
            )
            .await;

        // Assert
        assert!(result.is_ok());
        assert_eq!(deleted.lock().unwrap().as_slice(), &[fixture.comment.id]);
    }

    #[tokio::test]
    async fn the_post_author_moderates_a_comment() {
        // Arrange
        let fixture = Fixture::new();
        let (service, _) = service_for(&fixture);

        // Act
        let result = service
            .execute(
                fixture.post.id,
                fixture.comment.id,
                fixture.post.author_id,
                Role::Teacher,
            )
            .await;

        // Assert
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn an_admin_deletes_any_comment() {
        // Arrange
        let fixture = Fixture::new();
        let (service, _) = service_for(&fixture);

        // Act
        let result = service
            .execute(
                fixture.post.id,
                fixture.comment.id,
                Uuid::new_v4(),
                Role::Admin,
            )
            .await;

        // Assert
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn a_bystander_is_forbidden() {
        // Arrange
        let fixture = Fixture::new();
        let (service, deleted) = service_for(&fixture);

        // Act
        let result = service
            .execute(
                fixture.post.id,
                fixture.comment.id,
                Uuid::new_v4(),
                Role::Student,
            )
            .await;

        // Assert
        assert!(matches!(result, Err(DeleteCommentError::Forbidden)));
        assert!(deleted.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn a_comment_under_a_different_post_is_not_found() {
        // Arrange
        let fixture = Fixture::new();
        let (service, _) = service_for(&fixture);

        // Act
        let result = service
            .execute(
                Uuid::new_v4(),
                fixture.comment.id,
                fixture.comment.author_id,
                Role::Student,
            )
            .await;

        // Assert
        assert!(matches!(result, Err(DeleteCommentError::CommentNotFound)));
    }
}
