use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ImageStoreError {
    #[error("Storage error: {0}")]
    StorageError(String),
}

/// Binary storage for profile photos. The user row keeps only the file
/// name; bytes live behind this port.
#[async_trait]
pub trait ProfileImageStore: Send + Sync {
    async fn store_photo(&self, file_name: &str, bytes: Vec<u8>) -> Result<(), ImageStoreError>;

    /// Removing a file that is already gone is not an error.
    async fn remove_photo(&self, file_name: &str) -> Result<(), ImageStoreError>;
}
