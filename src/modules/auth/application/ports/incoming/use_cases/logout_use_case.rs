use async_trait::async_trait;

//
// ──────────────────────────────────────────────────────────
// Logout Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct LogoutCommand {
    access_token: String,
    refresh_token: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum LogoutCommandError {
    #[error("Access token cannot be empty")]
    EmptyAccessToken,
}

impl LogoutCommand {
    pub fn new(
        access_token: String,
        refresh_token: Option<String>,
    ) -> Result<Self, LogoutCommandError> {
        if access_token.trim().is_empty() {
            return Err(LogoutCommandError::EmptyAccessToken);
        }

        let refresh_token = refresh_token.filter(|t| !t.trim().is_empty());

        Ok(Self {
            access_token,
            refresh_token,
        })
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub fn refresh_token(&self) -> Option<&str> {
        self.refresh_token.as_deref()
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum LogoutError {
    #[error("Invalid token")]
    InvalidToken,

    #[error("Revocation store error: {0}")]
    StoreError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

/// Puts the presented tokens on the revocation list until they would have
/// expired on their own.
#[async_trait]
pub trait LogoutUseCase: Send + Sync {
    async fn execute(&self, command: LogoutCommand) -> Result<(), LogoutError>;
}
