use async_trait::async_trait;
use std::path::{Path, PathBuf};

use crate::auth::application::ports::outgoing::{ImageStoreError, ProfileImageStore};

/// Stores profile photos on the local disk under a single directory.
/// File names are generated by the application layer and are always a
/// single path component.
#[derive(Clone, Debug)]
pub struct ImageStoreFs {
    base_dir: PathBuf,
}

impl ImageStoreFs {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Reads UPLOADS_DIR, defaulting to `./uploads`.
    pub fn from_env() -> Self {
        let dir = std::env::var("UPLOADS_DIR").unwrap_or_else(|_| "./uploads".to_string());
        Self::new(dir)
    }

    fn path_for(&self, file_name: &str) -> Result<PathBuf, ImageStoreError> {
        if Path::new(file_name).components().count() != 1 {
            return Err(ImageStoreError::StorageError(format!(
                "Refusing file name with path components: {file_name}"
            )));
        }
        Ok(self.base_dir.join(file_name))
    }
}

#[async_trait]
impl ProfileImageStore for ImageStoreFs {
    async fn store_photo(&self, file_name: &str, bytes: Vec<u8>) -> Result<(), ImageStoreError> {
        let path = self.path_for(file_name)?;

        tokio::fs::create_dir_all(&self.base_dir)
            .await
            .map_err(|e| ImageStoreError::StorageError(e.to_string()))?;

        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| ImageStoreError::StorageError(e.to_string()))
    }

    async fn remove_photo(&self, file_name: &str) -> Result<(), ImageStoreError> {
        let path = self.path_for(file_name)?;

        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ImageStoreError::StorageError(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn scratch_store() -> ImageStoreFs {
        let dir = std::env::temp_dir().join(format!("portal_photos_{}", Uuid::new_v4()));
        ImageStoreFs::new(dir)
    }

    #[tokio::test]
    async fn stores_and_removes_a_photo() {
        // Arrange
        let store = scratch_store();

        // Act
        store
            .store_photo("avatar.png", b"fake image bytes".to_vec())
            .await
            .unwrap();

        // Assert
        let on_disk = tokio::fs::read(store.base_dir.join("avatar.png"))
            .await
            .unwrap();
        assert_eq!(on_disk, b"fake image bytes");

        store.remove_photo("avatar.png").await.unwrap();
        assert!(!store.base_dir.join("avatar.png").exists());
    }

    #[tokio::test]
    async fn removing_a_missing_photo_is_a_noop() {
        // Arrange
        let store = scratch_store();

        // Act
        let result = store.remove_photo("never-stored.png").await;

        // Assert
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn a_name_with_path_components_is_refused() {
        // Arrange
        let store = scratch_store();

        // Act
        let result = store
            .store_photo("../outside.png", b"nope".to_vec())
            .await;

        // Assert
        assert!(matches!(result, Err(ImageStoreError::StorageError(_))));
    }
}
