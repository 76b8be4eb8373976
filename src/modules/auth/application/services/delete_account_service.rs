use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::application::ports::{
    incoming::use_cases::{DeleteAccountError, DeleteAccountUseCase},
    outgoing::{ProfileImageStore, TokenRepository, UserRepository, UserRepositoryError},
};

#[derive(Clone)]
pub struct DeleteAccountService<R, S, T>
where
    R: UserRepository + Send + Sync,
    S: ProfileImageStore + Send + Sync,
    T: TokenRepository + Send + Sync,
{
    repository: R,
    store: S,
    token_repository: T,
}

impl<R, S, T> DeleteAccountService<R, S, T>
where
    R: UserRepository + Send + Sync,
    S: ProfileImageStore + Send + Sync,
    T: TokenRepository + Send + Sync,
{
    pub fn new(repository: R, store: S, token_repository: T) -> Self {
        Self {
            repository,
            store,
            token_repository,
        }
    }
}

#[async_trait]
impl<R, S, T> DeleteAccountUseCase for DeleteAccountService<R, S, T>
where
    R: UserRepository + Send + Sync,
    S: ProfileImageStore + Send + Sync,
    T: TokenRepository + Send + Sync,
{
    /// The database cascade is the transaction; photo and token cleanup
    /// happen after the commit and cannot fail the deletion.
    async fn execute(&self, user_id: Uuid) -> Result<(), DeleteAccountError> {
        let deleted = self
            .repository
            .delete_account(user_id)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => DeleteAccountError::UserNotFound,
                UserRepositoryError::TeacherInSchedule => DeleteAccountError::TeacherInSchedule,
                other => DeleteAccountError::RepositoryError(other.to_string()),
            })?;

        if let Some(photo_file) = &deleted.photo_file {
            if let Err(e) = self.store.remove_photo(photo_file).await {
                warn!("Could not remove photo of deleted account: {}", e);
            }
        }

        if let Err(e) = self.token_repository.revoke_all_user_tokens(user_id).await {
            warn!("Could not revoke tokens of deleted account: {}", e);
        }

        info!(
            "Account {} deleted ({} posts, {} comments, {} likes removed)",
            user_id, deleted.posts_removed, deleted.comments_removed, deleted.likes_removed
        );

        Ok(())
    }
}
