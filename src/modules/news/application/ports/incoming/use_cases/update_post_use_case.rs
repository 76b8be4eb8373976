use async_trait::async_trait;
use uuid::Uuid;

use super::create_post_use_case::PostCommandError;
use crate::auth::application::domain::entities::Role;
use crate::news::application::domain::entities::NewsPost;

//
// ──────────────────────────────────────────────────────────
// Update Post Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct UpdatePostCommand {
    post_id: Uuid,
    editor_id: Uuid,
    editor_role: Role,
    title: String,
    content: String,
}

impl UpdatePostCommand {
    pub fn new(
        post_id: Uuid,
        editor_id: Uuid,
        editor_role: Role,
        title: String,
        content: String,
    ) -> Result<Self, PostCommandError> {
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
            post_id,
            editor_id,
            editor_role,
            title: title.to_string(),
            content: content.to_string(),
        })
    }

    pub fn post_id(&self) -> Uuid {
        self.post_id
    }

    pub fn editor_id(&self) -> Uuid {
        self.editor_id
    }

    pub fn editor_role(&self) -> Role {
        self.editor_role
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
pub enum UpdatePostError {
    #[error("News post not found")]
    PostNotFound,

    #[error("Only the author or an admin may modify this post")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait UpdatePostUseCase: Send + Sync {
    async fn execute(&self, command: UpdatePostCommand) -> Result<NewsPost, UpdatePostError>;
}
