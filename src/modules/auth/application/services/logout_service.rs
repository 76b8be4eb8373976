use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use tracing::{info, warn};

use crate::auth::application::ports::{
    incoming::use_cases::{LogoutCommand, LogoutError, LogoutUseCase},
    outgoing::{token_hasher::hash_token, TokenProvider, TokenRepository},
};

#[derive(Clone)]
pub struct LogoutService<R>
where
    R: TokenRepository + Send + Sync,
{
    token_repository: R,
    token_provider: Arc<dyn TokenProvider>,
}

impl<R> LogoutService<R>
where
    R: TokenRepository + Send + Sync,
{
    pub fn new(token_repository: R, token_provider: Arc<dyn TokenProvider>) -> Self {
        Self {
            token_repository,
            token_provider,
        }
    }

    fn expiry_or_default(exp: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(exp, 0).unwrap_or_else(|| Utc::now() + Duration::days(7))
    }
}

#[async_trait]
impl<R> LogoutUseCase for LogoutService<R>
where
    R: TokenRepository + Send + Sync,
{
    async fn execute(&self, command: LogoutCommand) -> Result<(), LogoutError> {
        let claims = self
            .token_provider
            .verify_token(command.access_token())
            .map_err(|_| LogoutError::InvalidToken)?;

        self.token_repository
            .blacklist_token(
                hash_token(command.access_token()),
                claims.sub,
                Self::expiry_or_default(claims.exp),
            )
            .await
            .map_err(|e| LogoutError::StoreError(e.to_string()))?;

        // A refresh token that no longer verifies is already unusable;
        // skipping it keeps logout idempotent from the caller's side.
        if let Some(refresh_token) = command.refresh_token() {
            match self.token_provider.verify_token(refresh_token) {
                Ok(refresh_claims) => {
                    self.token_repository
                        .blacklist_token(
                            hash_token(refresh_token),
                            refresh_claims.sub,
                            Self::expiry_or_default(refresh_claims.exp),
                        )
                        .await
                        .map_err(|e| LogoutError::StoreError(e.to_string()))?;
                }
                Err(e) => {
                    warn!("Refresh token skipped during logout: {}", e);
                }
            }
        }

        info!("User {} logged out", claims.sub);

        Ok(())
    }
}
