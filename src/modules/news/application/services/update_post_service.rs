use async_trait::async_trait;

use crate::news::application::{
    domain::entities::NewsPost,
    domain::ownership::may_modify_post,
    ports::incoming::use_cases::{UpdatePostCommand, UpdatePostError, UpdatePostUseCase},
    ports::outgoing::{NewsQuery, NewsRepository, NewsRepositoryError, UpdatePostData},
};

#[derive(Debug, Clone)]
pub struct UpdatePostService<Q, R>
where
    Q: NewsQuery + Send + Sync,
    R: NewsRepository + Send + Sync,
{
    query: Q,
    repository: R,
}

impl<Q, R> UpdatePostService<Q, R>
where
    Q: NewsQuery + Send + Sync,
    R: NewsRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> UpdatePostUseCase for UpdatePostService<Q, R>
where
    Q: NewsQuery + Send + Sync,
    R: NewsRepository + Send + Sync,
{
    async fn execute(&self, command: UpdatePostCommand) -> Result<NewsPost, UpdatePostError> {
        let post = self
            .query
            .find_post(command.post_id())
            .await
            .map_err(|e| UpdatePostError::RepositoryError(e.to_string()))?
            .ok_or(UpdatePostError::PostNotFound)?;

        if !may_modify_post(post.author_id, command.editor_id(), command.editor_role()) {
            return Err(UpdatePostError::Forbidden);
        }

        let data = UpdatePostData {
            post_id: command.post_id(),
            title: command.title().to_string(),
            content: command.content().to_string(),
        };

        self.repository
            .update_post(data)
            .await
            .map_err(|e| match e {
                NewsRepositoryError::PostNotFound => UpdatePostError::PostNotFound,
                other => UpdatePostError::RepositoryError(other.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;
    use std::sync::{Arc, Mutex};
    use uuid::Uuid;

    use crate::auth::application::domain::entities::Role;
    use crate::news::application::domain::entities::{
        AuthorPost, Comment, LikeStatus, PostDetail, PostSummary,
    };
    use crate::news::application::ports::outgoing::{
        CreateCommentData, CreatePostData, NewsQueryError,
    };

    fn post(author_id: Uuid) -> NewsPost {
        let now = Utc::now();
        NewsPost {
            id: Uuid::new_v4(),
            title: "Old title".to_string(),
            content: "Old body".to_string(),
            author_id,
            created_at: now,
            updated_at: now,
        }
    }

    #[derive(Debug, Clone)]
    struct MockNewsQuery {
        post: Option<NewsPost>,
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
            unimplemented!()
        }

        async fn list_author_posts(
            &self,
            _author_id: Uuid,
        ) -> Result<Vec<AuthorPost>, NewsQueryError> {
            unimplemented!()
        }
    }

    #[derive(Debug, Clone)]
    struct MockNewsRepository {
        result: Result<NewsPost, NewsRepositoryError>,
        updates: Arc<Mutex<Vec<UpdatePostData>>>,
    }

    impl MockNewsRepository {
        fn with_result(result: Result<NewsPost, NewsRepositoryError>) -> Self {
            Self {
                result,
                updates: Arc::new(Mutex::new(Vec::new())),
            }
        }
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
            data: UpdatePostData,
        ) -> Result<NewsPost, NewsRepositoryError> {
            self.updates.lock().unwrap().push(data);
            self.result.clone()
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

        async fn delete_comment(&self, _comment_id: Uuid) -> Result<(), NewsRepositoryError> {
            unimplemented!()
        }

        async fn toggle_like(
            &self,
            _post_id: Uuid,
            _user_id: Uuid,
        ) -> Result<LikeStatus, NewsRepositoryError> {
            unimplemented!()
        }
    }

    #[tokio::test]
    async fn the_author_edits_their_post() {
        // Arrange
        let author = Uuid::new_v4();
        let existing = post(author);
        let mut updated = existing.clone();
        updated.title = "New title".to_string();
        let repository = MockNewsRepository::with_result(Ok(updated.clone()));
        let service = UpdatePostService::new(
            MockNewsQuery {
                post: Some(existing.clone()),
            },
            repository,
        );
        let command = UpdatePostCommand::new(
            existing.id,
            author,
            Role::Student,
            "New title".to_string(),
            "New body".to_string(),
        )
        .unwrap();

        // Act
        let result = service.execute(command).await;

        // Assert
        assert_eq!(result.unwrap(), updated);
    }

    #[tokio::test]
    async fn an_admin_edits_someone_elses_post() {
        // Arrange
        let existing = post(Uuid::new_v4());
        let service = UpdatePostService::new(
            MockNewsQuery {
                post: Some(existing.clone()),
            },
            MockNewsRepository::with_result(Ok(existing.clone())),
        );
        let command = UpdatePostCommand::new(
            existing.id,
            Uuid::new_v4(),
            Role::Admin,
            "Moderated".to_string(),
            "Edited".to_string(),
        )
        .unwrap();

        // Act
        let result = service.execute(command).await;

        // Assert
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn another_user_is_forbidden_and_nothing_is_written() {
        // Arrange
        let existing = post(Uuid::new_v4());
        let repository = MockNewsRepository::with_result(Ok(existing.clone()));
        let updates = repository.updates.clone();
        let service = UpdatePostService::new(
            MockNewsQuery {
                post: Some(existing.clone()),
            },
            repository,
        );
        let command = UpdatePostCommand::new(
            existing.id,
            Uuid::new_v4(),
            Role::Teacher,
            "Hijacked".to_string(),
            "Nope".to_string(),
        )
        .unwrap();

        // Act
        let result = service.execute(command).await;

        // Assert
        assert!(matches!(result, Err(UpdatePostError::Forbidden)));
        assert!(updates.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn a_missing_post_is_not_found() {
        // Arrange
        let service = UpdatePostService::new(
            MockNewsQuery { post: None },
            MockNewsRepository::with_result(Err(NewsRepositoryError::PostNotFound)),
        );
        let command = UpdatePostCommand::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            Role::Admin,
            "Title".to_string(),
            "Body".to_string(),
        )
        .unwrap();

        // Act
        let result = service.execute(command).await;

        // Assert
        assert!(matches!(result, Err(UpdatePostError::PostNotFound)));
    }
}
