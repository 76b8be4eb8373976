use async_trait::async_trait;
use serde::Serialize;

//
// ──────────────────────────────────────────────────────────
// Result
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Serialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum RefreshTokenError {
    #[error("Token has been revoked")]
    TokenRevoked,

    #[error("Invalid refresh token: {0}")]
    InvalidToken(String),

    #[error("Token generation failed: {0}")]
    GenerationFailed(String),

    #[error("Revocation store error: {0}")]
    StoreError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

/// Exchanges an unrevoked refresh token for a fresh pair, rotating the old
/// refresh token onto the revocation list.
#[async_trait]
pub trait RefreshTokenUseCase: Send + Sync {
    async fn execute(&self, refresh_token: &str) -> Result<TokenPair, RefreshTokenError>;
}
