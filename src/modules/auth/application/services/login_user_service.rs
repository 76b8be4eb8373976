use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::auth::application::domain::entities::{ApprovalStatus, RoleAssignment};
use crate::auth::application::ports::{
    incoming::use_cases::{LoggedInUser, LoginCommand, LoginError, LoginResult, LoginUserUseCase},
    outgoing::{PasswordHasher, TokenProvider, UserQuery},
};

#[derive(Clone)]
pub struct LoginUserService<Q, H>
where
    Q: UserQuery + Send + Sync,
    H: PasswordHasher + Send + Sync,
{
    query: Q,
    hasher: H,
    token_provider: Arc<dyn TokenProvider>,
}

impl<Q, H> LoginUserService<Q, H>
where
    Q: UserQuery + Send + Sync,
    H: PasswordHasher + Send + Sync,
{
    pub fn new(query: Q, hasher: H, token_provider: Arc<dyn TokenProvider>) -> Self {
        Self {
            query,
            hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q, H> LoginUserUseCase for LoginUserService<Q, H>
where
    Q: UserQuery + Send + Sync,
    H: PasswordHasher + Send + Sync,
{
    /// Checks run in a fixed order: existence, role match, approval
    /// status, then the password. A pending or rejected registration is
    /// reported as such even when the password would not have matched.
    async fn execute(&self, command: LoginCommand) -> Result<LoginResult, LoginError> {
        let user = self
            .query
            .find_by_username(command.username())
            .await
            .map_err(|e| LoginError::QueryError(e.to_string()))?
            .ok_or(LoginError::UserNotFound)?;

        if user.role() != command.role() {
            return Err(LoginError::RoleMismatch(command.role()));
        }

        match user.status {
            ApprovalStatus::Pending => return Err(LoginError::AwaitingApproval),
            ApprovalStatus::Rejected => return Err(LoginError::RegistrationRejected),
            ApprovalStatus::Approved => {}
        }

        let password_ok = self
            .hasher
            .verify_password(command.password(), &user.password_hash)
            .await
            .map_err(|e| LoginError::VerificationFailed(e.to_string()))?;

        if !password_ok {
            return Err(LoginError::InvalidPassword);
        }

        let access_token = self
            .token_provider
            .generate_access_token(user.id.value(), user.role())
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;

        let refresh_token = self
            .token_provider
            .generate_refresh_token(user.id.value(), user.role())
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;

        info!("User {} logged in as {:?}", user.username, user.role());

        let (group_id, course) = match user.assignment {
            RoleAssignment::Student { group_id, course } => (Some(group_id), Some(course)),
            _ => (None, None),
        };

        Ok(LoginResult {
            access_token,
            refresh_token,
            user: LoggedInUser {
                id: user.id.value(),
                username: user.username,
                role: user.assignment.role(),
                group_id,
                course,
            },
        })
    }
}
