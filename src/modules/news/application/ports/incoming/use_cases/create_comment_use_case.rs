use async_trait::async_trait;
use uuid::Uuid;

use crate::news::application::domain::entities::Comment;

//
// ──────────────────────────────────────────────────────────
// Create Comment Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateCommentCommand {
    post_id: Uuid,
    author_id: Uuid,
    content: String,
}

#[derive(Debug, thiserror::Error)]
pub enum CommentCommandError {
    #[error("Comment cannot be empty")]
    EmptyContent,
}

impl CreateCommentCommand {
    pub fn new(
        post_id: Uuid,
        author_id: Uuid,
        content: String,
    ) -> Result<Self, CommentCommandError> {
        let content = content.trim();

        if content.is_empty() {
            return Err(CommentCommandError::EmptyContent);
        }

        Ok(Self {
            post_id,
            author_id,
            content: content.to_string(),
        })
    }

    pub fn post_id(&self) -> Uuid {
        self.post_id
    }

    pub fn author_id(&self) -> Uuid {
        self.author_id
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
pub enum CreateCommentError {
    #[error("News post not found")]
    PostNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateCommentUseCase: Send + Sync {
    async fn execute(&self, command: CreateCommentCommand) -> Result<Comment, CreateCommentError>;
}
