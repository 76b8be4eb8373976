use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum TokenRepositoryError {
    #[error("Store error: {0}")]
    StoreError(String),
}

/// Revocation list for issued tokens. Entries are keyed by token digest and
/// expire together with the token they revoke.
#[async_trait]
pub trait TokenRepository: Send + Sync {
    async fn blacklist_token(
        &self,
        token_hash: String,
        user_id: Uuid,
        expires_at: DateTime<Utc>,
    ) -> Result<(), TokenRepositoryError>;

    async fn is_token_blacklisted(&self, token_hash: &str) -> Result<bool, TokenRepositoryError>;

    /// Revoke every outstanding token for a user, used on account deletion.
    async fn revoke_all_user_tokens(&self, user_id: Uuid) -> Result<(), TokenRepositoryError>;
}
