use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::{ApprovalStatus, RoleAssignment, User};

// Input DTO for creating an identity; the password arrives already hashed
#[derive(Debug, Clone)]
pub struct CreateUserData {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub assignment: RoleAssignment,
}

/// What was removed along with an account, reported so the caller can
/// clean up externally stored assets.
#[derive(Debug, Clone)]
pub struct DeletedAccount {
    pub photo_file: Option<String>,
    pub posts_removed: u64,
    pub comments_removed: u64,
    pub likes_removed: u64,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("Username or email is already taken")]
    UserAlreadyExists,

    #[error("User not found")]
    UserNotFound,

    #[error("Referenced group does not exist")]
    GroupNotFound,

    #[error("Teacher is still assigned to schedule slots")]
    TeacherInSchedule,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, data: CreateUserData) -> Result<User, UserRepositoryError>;

    async fn update_status(
        &self,
        user_id: Uuid,
        status: ApprovalStatus,
    ) -> Result<User, UserRepositoryError>;

    /// Replace the stored photo file name, returning the previous one.
    async fn update_photo(
        &self,
        user_id: Uuid,
        photo_file: Option<String>,
    ) -> Result<Option<String>, UserRepositoryError>;

    /// Remove the account and everything it owns: likes, comments, the
    /// user's posts with their comments and likes, then the user row.
    /// Runs in a single transaction.
    async fn delete_account(&self, user_id: Uuid) -> Result<DeletedAccount, UserRepositoryError>;
}
