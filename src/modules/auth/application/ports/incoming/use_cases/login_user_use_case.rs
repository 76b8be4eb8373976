use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use crate::auth::application::domain::entities::{Course, Role};

//
// ──────────────────────────────────────────────────────────
// Login Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct LoginCommand {
    username: String,
    password: String,
    role: Role,
}

#[derive(Debug, thiserror::Error)]
pub enum LoginCommandError {
    #[error("Username cannot be empty")]
    EmptyUsername,

    #[error("Password cannot be empty")]
    EmptyPassword,
}

impl LoginCommand {
    /// The role is the one claimed on the login form; it must match the
    /// stored role before the password is even looked at.
    pub fn new(username: String, password: String, role: Role) -> Result<Self, LoginCommandError> {
        let username = username.trim();

        if username.is_empty() {
            return Err(LoginCommandError::EmptyUsername);
        }

        if password.is_empty() {
            return Err(LoginCommandError::EmptyPassword);
        }

        Ok(Self {
            username: username.to_string(),
            password,
            role,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn role(&self) -> Role {
        self.role
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

/// Failure taxonomy checked in order; every variant before
/// InvalidPassword short-circuits without touching the credential hash.
#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginError {
    #[error("User not found")]
    UserNotFound,

    #[error("No {0:?} account is registered under that username")]
    RoleMismatch(Role),

    #[error("Registration is awaiting approval")]
    AwaitingApproval,

    #[error("Registration was rejected, please register again")]
    RegistrationRejected,

    #[error("Invalid password")]
    InvalidPassword,

    #[error("Password verification failed: {0}")]
    VerificationFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Query error: {0}")]
    QueryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Result
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Serialize)]
pub struct LoggedInUser {
    pub id: Uuid,
    pub username: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course: Option<Course>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginResult {
    pub access_token: String,
    pub refresh_token: String,
    pub user: LoggedInUser,
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait LoginUserUseCase: Send + Sync {
    async fn execute(&self, command: LoginCommand) -> Result<LoginResult, LoginError>;
}
