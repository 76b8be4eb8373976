use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use crate::auth::application::domain::photo_policy::{PhotoPolicy, PhotoPolicyError};

//
// ──────────────────────────────────────────────────────────
// Update Photo Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct UpdateProfilePhotoCommand {
    user_id: Uuid,
    file_name: String,
    bytes: Vec<u8>,
}

impl UpdateProfilePhotoCommand {
    /// Validates the upload against the photo policy before any I/O.
    pub fn new(user_id: Uuid, file_name: String, bytes: Vec<u8>) -> Result<Self, PhotoPolicyError> {
        let policy = PhotoPolicy::new();
        policy.validate(&file_name, bytes.len() as u64)?;

        Ok(Self {
            user_id,
            file_name: file_name.trim().to_string(),
            bytes,
        })
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateProfilePhotoError {
    #[error("User not found")]
    UserNotFound,

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdatedPhoto {
    pub photo_file: String,
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

/// Stores the new photo under a fresh name, points the user row at it and
/// removes the file it replaced.
#[async_trait]
pub trait UpdateProfilePhotoUseCase: Send + Sync {
    async fn execute(
        &self,
        command: UpdateProfilePhotoCommand,
    ) -> Result<UpdatedPhoto, UpdateProfilePhotoError>;
}
