use async_trait::async_trait;
use tracing::warn;
use uuid::Uuid;

use crate::auth::application::ports::{
    incoming::use_cases::{RemoveProfilePhotoError, RemoveProfilePhotoUseCase},
    outgoing::{ProfileImageStore, UserRepository, UserRepositoryError},
};

#[derive(Debug, Clone)]
pub struct RemoveProfilePhotoService<R, S>
where
    R: UserRepository + Send + Sync,
    S: ProfileImageStore + Send + Sync,
{
    repository: R,
    store: S,
}

impl<R, S> RemoveProfilePhotoService<R, S>
where
    R: UserRepository + Send + Sync,
    S: ProfileImageStore + Send + Sync,
{
    pub fn new(repository: R, store: S) -> Self {
        Self { repository, store }
    }
}

#[async_trait]
impl<R, S> RemoveProfilePhotoUseCase for RemoveProfilePhotoService<R, S>
where
    R: UserRepository + Send + Sync,
    S: ProfileImageStore + Send + Sync,
{
    async fn execute(&self, user_id: Uuid) -> Result<(), RemoveProfilePhotoError> {
        let previous = self
            .repository
            .update_photo(user_id, None)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => RemoveProfilePhotoError::UserNotFound,
                other => RemoveProfilePhotoError::RepositoryError(other.to_string()),
            })?;

        // Clearing an already empty photo is a success; the row is the
        // source of truth, the file only follows it.
        if let Some(old_file) = previous {
            if let Err(e) = self.store.remove_photo(&old_file).await {
                warn!("Could not remove photo file {}: {}", old_file, e);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    use crate::auth::application::domain::entities::{ApprovalStatus, User};
    use crate::auth::application::ports::outgoing::{
        CreateUserData, DeletedAccount, ImageStoreError,
    };

    #[derive(Debug, Clone, Default)]
    struct MockImageStore {
        removed: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl ProfileImageStore for MockImageStore {
        async fn store_photo(
            &self,
            _file_name: &str,
            _bytes: Vec<u8>,
        ) -> Result<(), ImageStoreError> {
            unimplemented!()
        }

        async fn remove_photo(&self, file_name: &str) -> Result<(), ImageStoreError> {
            self.removed.lock().unwrap().push(file_name.to_string());
            Ok(())
        }
    }

    #[derive(Debug, Clone, Default)]
    struct MockUserRepository {
        previous_photo: Option<String>,
        user_missing: bool,
    }

    #[async_trait]
    impl UserRepository for MockUserRepository {
        async fn create_user(&self, _data: CreateUserData) -> Result<User, UserRepositoryError> {
            unimplemented!()
        }

        async fn update_status(
            &self,
            _user_id: Uuid,
            _status: ApprovalStatus,
        ) -> Result<User, UserRepositoryError> {
            unimplemented!()
        }

        async fn update_photo(
            &self,
            _user_id: Uuid,
            _photo_file: Option<String>,
        ) -> Result<Option<String>, UserRepositoryError> {
            if self.user_missing {
                return Err(UserRepositoryError::UserNotFound);
            }
            Ok(self.previous_photo.clone())
        }

        async fn delete_account(
            &self,
            _user_id: Uuid,
        ) -> Result<DeletedAccount, UserRepositoryError> {
            unimplemented!()
        }
    }

    #[tokio::test]
    async fn removing_a_set_photo_deletes_the_file() {
        // Arrange
        let store = MockImageStore::default();
        let removed = store.removed.clone();
        let repo = MockUserRepository {
            previous_photo: Some("portrait.png".to_string()),
            ..MockUserRepository::default()
        };
        let svc = RemoveProfilePhotoService::new(repo, store);

        // Act
        let result = svc.execute(Uuid::new_v4()).await;

        // Assert
        assert!(result.is_ok());
        assert_eq!(removed.lock().unwrap().clone(), vec!["portrait.png".to_string()]);
    }

    #[tokio::test]
    async fn removing_when_no_photo_is_set_is_a_no_op_success() {
        // Arrange
        let store = MockImageStore::default();
        let removed = store.removed.clone();
        let svc = RemoveProfilePhotoService::new(MockUserRepository::default(), store);

        // Act
        let result = svc.execute(Uuid::new_v4()).await;

        // Assert
        assert!(result.is_ok());
        assert!(removed.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn unknown_user_is_reported() {
        // Arrange
        let repo = MockUserRepository {
            user_missing: true,
            ..MockUserRepository::default()
        };
        let svc = RemoveProfilePhotoService::new(repo, MockImageStore::default());

        // Act
        let result = svc.execute(Uuid::new_v4()).await;

        // Assert
        assert!(matches!(result, Err(RemoveProfilePhotoError::UserNotFound)));
    }
}
