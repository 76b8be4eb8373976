use async_trait::async_trait;
use email_address::EmailAddress;

use crate::auth::application::domain::entities::{RoleAssignment, User};

//
// ──────────────────────────────────────────────────────────
// Register Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
    username: String,
    email: String,
    password: String,
    assignment: RoleAssignment,
}

#[derive(Debug, thiserror::Error)]
pub enum RegisterUserCommandError {
    #[error("Username cannot be empty")]
    EmptyUsername,

    #[error("Username must not exceed 50 characters")]
    UsernameTooLong,

    #[error("Invalid email format")]
    InvalidEmailFormat,

    #[error("Password must be at least 8 characters")]
    PasswordTooShort,
}

impl RegisterUserCommand {
    pub const MIN_PASSWORD_LEN: usize = 8;

    pub fn new(
        username: String,
        email: String,
        password: String,
        assignment: RoleAssignment,
    ) -> Result<Self, RegisterUserCommandError> {
        let username = username.trim();

        if username.is_empty() {
            return Err(RegisterUserCommandError::EmptyUsername);
        }

        if username.len() > 50 {
            return Err(RegisterUserCommandError::UsernameTooLong);
        }

        let email = email.trim().to_lowercase();
        if !EmailAddress::is_valid(&email) {
            return Err(RegisterUserCommandError::InvalidEmailFormat);
        }

        if password.len() < Self::MIN_PASSWORD_LEN {
            return Err(RegisterUserCommandError::PasswordTooShort);
        }

        Ok(Self {
            username: username.to_string(),
            email,
            password,
            assignment,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn assignment(&self) -> &RoleAssignment {
        &self.assignment
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum RegisterUserError {
    #[error("Username or email is already taken")]
    UserAlreadyExists,

    #[error("Group not found")]
    GroupNotFound,

    #[error("Password hashing failed")]
    HashingFailed,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

/// Creates a new identity in the pending state; an admin review decides
/// whether it may ever log in.
#[async_trait]
pub trait RegisterUserUseCase: Send + Sync {
    async fn execute(&self, command: RegisterUserCommand) -> Result<User, RegisterUserError>;
}
