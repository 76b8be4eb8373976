use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

use crate::auth::application::ports::{
    incoming::use_cases::{RefreshTokenError, RefreshTokenUseCase, TokenPair},
    outgoing::{token_hasher::hash_token, TokenProvider, TokenRepository},
};

#[derive(Clone)]
pub struct RefreshTokenService<R>
where
    R: TokenRepository + Send + Sync,
{
    token_repository: R,
    token_provider: Arc<dyn TokenProvider>,
}

impl<R> RefreshTokenService<R>
where
    R: TokenRepository + Send + Sync,
{
    pub fn new(token_repository: R, token_provider: Arc<dyn TokenProvider>) -> Self {
        Self {
            token_repository,
            token_provider,
        }
    }
}

#[async_trait]
impl<R> RefreshTokenUseCase for RefreshTokenService<R>
where
    R: TokenRepository + Send + Sync,
{
    /// Rotation: the presented refresh token is revoked as part of the
    /// exchange, so each refresh token works exactly once.
    async fn execute(&self, refresh_token: &str) -> Result<TokenPair, RefreshTokenError> {
        let token_hash = hash_token(refresh_token);

        let revoked = self
            .token_repository
            .is_token_blacklisted(&token_hash)
            .await
            .map_err(|e| RefreshTokenError::StoreError(e.to_string()))?;

        if revoked {
            return Err(RefreshTokenError::TokenRevoked);
        }

        let claims = self
            .token_provider
            .verify_token(refresh_token)
            .map_err(|e| RefreshTokenError::InvalidToken(e.to_string()))?;

        if claims.token_type != "refresh" {
            return Err(RefreshTokenError::InvalidToken(format!(
                "expected a refresh token, got {}",
                claims.token_type
            )));
        }

        let access_token = self
            .token_provider
            .generate_access_token(claims.sub, claims.role)
            .map_err(|e| RefreshTokenError::GenerationFailed(e.to_string()))?;

        let new_refresh_token = self
            .token_provider
            .generate_refresh_token(claims.sub, claims.role)
            .map_err(|e| RefreshTokenError::GenerationFailed(e.to_string()))?;

        let expires_at = DateTime::from_timestamp(claims.exp, 0)
            .unwrap_or_else(|| Utc::now() + Duration::days(7));

        self.token_repository
            .blacklist_token(token_hash, claims.sub, expires_at)
            .await
            .map_err(|e| RefreshTokenError::StoreError(e.to_string()))?;

        Ok(TokenPair {
            access_token,
            refresh_token: new_refresh_token,
        })
    }
}
