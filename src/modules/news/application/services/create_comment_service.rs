use async_trait::async_trait;

use crate::news::application::{
    domain::entities::Comment,
    ports::incoming::use_cases::{CreateCommentCommand, CreateCommentError, CreateCommentUseCase},
    ports::outgoing::{CreateCommentData, NewsRepository, NewsRepositoryError},
};

#[derive(Debug, Clone)]
pub struct CreateCommentService<R>
where
    R: NewsRepository + Send + Sync,
{
    repository: R,
}

impl<R> CreateCommentService<R>
where
    R: NewsRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateCommentUseCase for CreateCommentService<R>
where
    R: NewsRepository + Send + Sync,
{
    async fn execute(&self, command: CreateCommentCommand) -> Result<Comment, CreateCommentError> {
        let data = CreateCommentData {
            post_id: command.post_id(),
            author_id: command.author_id(),
            content: command.content().to_string(),
        };

        self.repository
            .create_comment(data)
            .await
            .map_err(|e| match e {
                NewsRepositoryError::PostNotFound => CreateCommentError::PostNotFound,
                other => CreateCommentError::RepositoryError(other.to_string()),
            })
    }
}
