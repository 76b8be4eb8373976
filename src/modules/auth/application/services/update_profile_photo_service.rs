use async_trait::async_trait;
use tracing::warn;
use uuid::Uuid;

use crate::auth::application::domain::photo_policy::PhotoPolicy;
use crate::auth::application::ports::{
    incoming::use_cases::{
        UpdateProfilePhotoCommand, UpdateProfilePhotoError, UpdateProfilePhotoUseCase, UpdatedPhoto,
    },
    outgoing::{ProfileImageStore, UserRepository, UserRepositoryError},
};

#[derive(Debug, Clone)]
pub struct UpdateProfilePhotoService<R, S>
where
    R: UserRepository + Send + Sync,
    S: ProfileImageStore + Send + Sync,
{
    repository: R,
    store: S,
}

impl<R, S> UpdateProfilePhotoService<R, S>
where
    R: UserRepository + Send + Sync,
    S: ProfileImageStore + Send + Sync,
{
    pub fn new(repository: R, store: S) -> Self {
        Self { repository, store }
    }
}

#[async_trait]
impl<R, S> UpdateProfilePhotoUseCase for UpdateProfilePhotoService<R, S>
where
    R: UserRepository + Send + Sync,
    S: ProfileImageStore + Send + Sync,
{
    /// The upload is stored under a fresh random name before the user row
    /// is repointed, so a failed write never leaves the row referencing a
    /// file that does not exist.
    async fn execute(
        &self,
        command: UpdateProfilePhotoCommand,
    ) -> Result<UpdatedPhoto, UpdateProfilePhotoError> {
        let extension = PhotoPolicy::extension_of(command.file_name())
            .unwrap_or_else(|| "jpg".to_string());
        let stored_name = format!("{}.{}", Uuid::new_v4(), extension);

        let user_id = command.user_id();

        self.store
            .store_photo(&stored_name, command.into_bytes())
            .await
            .map_err(|e| UpdateProfilePhotoError::StorageError(e.to_string()))?;

        let previous = self
            .repository
            .update_photo(user_id, Some(stored_name.clone()))
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => UpdateProfilePhotoError::UserNotFound,
                other => UpdateProfilePhotoError::RepositoryError(other.to_string()),
            })?;

        // The replaced file is an orphan now; losing it is harmless.
        if let Some(old_file) = previous {
            if let Err(e) = self.store.remove_photo(&old_file).await {
                warn!("Could not remove replaced photo {}: {}", old_file, e);
            }
        }

        Ok(UpdatedPhoto {
            photo_file: stored_name,
        })
    }
}
