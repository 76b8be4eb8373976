use async_trait::async_trait;

use crate::news::application::{
    domain::entities::NewsPost,
    ports::incoming::use_cases::{CreatePostCommand, CreatePostError, CreatePostUseCase},
    ports::outgoing::{CreatePostData, NewsRepository},
};

#[derive(Debug, Clone)]
pub struct CreatePostService<R>
where
    R: NewsRepository + Send + Sync,
{
    repository: R,
}

impl<R> CreatePostService<R>
where
    R: NewsRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreatePostUseCase for CreatePostService<R>
where
    R: NewsRepository + Send + Sync,
{
    async fn execute(&self, command: CreatePostCommand) -> Result<NewsPost, CreatePostError> {
        let data = CreatePostData {
            author_id: command.author_id(),
            title: command.title().to_string(),
            content: command.content().to_string(),
        };

        self.repository
            .create_post(data)
            .await
            .map_err(|e| CreatePostError::RepositoryError(e.to_string()))
    }
}
