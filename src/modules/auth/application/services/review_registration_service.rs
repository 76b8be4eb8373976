use async_trait::async_trait;
use tracing::info;

use crate::auth::application::domain::entities::{StatusTransitionError, User};
use crate::auth::application::ports::{
    incoming::use_cases::{
        ReviewRegistrationCommand, ReviewRegistrationError, ReviewRegistrationUseCase,
    },
    outgoing::{UserQuery, UserRepository, UserRepositoryError},
};

#[derive(Debug, Clone)]
pub struct ReviewRegistrationService<R, Q>
where
    R: UserRepository + Send + Sync,
    Q: UserQuery + Send + Sync,
{
    repository: R,
    query: Q,
}

impl<R, Q> ReviewRegistrationService<R, Q>
where
    R: UserRepository + Send + Sync,
    Q: UserQuery + Send + Sync,
{
    pub fn new(repository: R, query: Q) -> Self {
        Self { repository, query }
    }
}

#[async_trait]
impl<R, Q> ReviewRegistrationUseCase for ReviewRegistrationService<R, Q>
where
    R: UserRepository + Send + Sync,
    Q: UserQuery + Send + Sync,
{
    async fn execute(
        &self,
        command: ReviewRegistrationCommand,
    ) -> Result<User, ReviewRegistrationError> {
        let user = self
            .query
            .find_by_id(command.user_id())
            .await
            .map_err(|e| ReviewRegistrationError::RepositoryError(e.to_string()))?
            .ok_or(ReviewRegistrationError::UserNotFound)?;

        let next_status = user.status.review(command.decision()).map_err(|e| match e {
            StatusTransitionError::AlreadyReviewed(status) => {
                ReviewRegistrationError::AlreadyReviewed(status)
            }
        })?;

        let reviewed = self
            .repository
            .update_status(command.user_id(), next_status)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => ReviewRegistrationError::UserNotFound,
                other => ReviewRegistrationError::RepositoryError(other.to_string()),
            })?;

        info!(
            "Registration of {} reviewed: {:?}",
            reviewed.username, reviewed.status
        );

        Ok(reviewed)
    }
}
