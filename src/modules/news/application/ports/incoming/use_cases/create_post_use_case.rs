use async_trait::async_trait;
use uuid::Uuid;

use crate::news::application::domain::entities::NewsPost;

//
// ──────────────────────────────────────────────────────────
// Create Post Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreatePostCommand {
    author_id: Uuid,
    title: String,
    content: String,
}

#[derive(Debug, thiserror::Error)]
pub enum PostCommandError {
    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("Title must not exceed 200 characters")]
    TitleTooLong,

    #[error("Content cannot be empty")]
    EmptyContent,
}

impl CreatePostCommand {
    pub fn new(author_id: Uuid, title: String, content: String) -> Result<Self, PostCommandError> {
        let title = title.trim();
        let content = content.trim();

        if title.is_empty() {
            return Err(PostCommandError::EmptyTitle);
        }

        if title.len() > 200 {
            return Err(PostCommandError::TitleTooLong);
        }

        if content.is_empty() {
            return Err(PostCommandError::EmptyContent);
        }

        Ok(Self {
            author_id,
            title: title.to_string(),
            content: content.to_string(),
        })
    }

    pub fn author_id(&self) -> Uuid {
        self.author_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreatePostError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreatePostUseCase: Send + Sync {
    async fn execute(&self, command: CreatePostCommand) -> Result<NewsPost, CreatePostError>;
}
