use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::{ApprovalStatus, ReviewDecision, User};

//
// ──────────────────────────────────────────────────────────
// Review Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct ReviewRegistrationCommand {
    user_id: Uuid,
    decision: ReviewDecision,
}

impl ReviewRegistrationCommand {
    pub fn new(user_id: Uuid, decision: ReviewDecision) -> Self {
        Self { user_id, decision }
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    pub fn decision(&self) -> ReviewDecision {
        self.decision
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ReviewRegistrationError {
    #[error("User not found")]
    UserNotFound,

    #[error("Registration was already {0:?}")]
    AlreadyReviewed(ApprovalStatus),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

/// Admin decision over a pending registration. Approved and rejected are
/// terminal; a second review of the same user fails.
#[async_trait]
pub trait ReviewRegistrationUseCase: Send + Sync {
    async fn execute(&self, command: ReviewRegistrationCommand)
        -> Result<User, ReviewRegistrationError>;
}
