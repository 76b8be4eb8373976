use async_trait::async_trait;
use chrono::{DateTime, Utc};
use deadpool_redis::{redis::AsyncCommands, Pool};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::{TokenRepository, TokenRepositoryError};

/// Redis-backed revocation list.
///
/// Two kinds of keys:
///
/// ```text
/// auth:blacklist:token:{token_hash} -> "{user_id}"   TTL = token expiry
/// auth:blacklist:user:{user_id}    -> SET(token_hash) TTL = token expiry
/// ```
///
/// The per-token key is authoritative; the per-user SET only exists so
/// account deletion can revoke everything without a scan. Redis TTL is the
/// single source of truth for cleanup.
#[derive(Clone)]
pub struct RedisTokenRepository {
    pool: Arc<Pool>,
}

impl RedisTokenRepository {
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool }
    }

    fn token_key(token_hash: &str) -> String {
        format!("auth:blacklist:token:{token_hash}")
    }

    fn user_key(user_id: Uuid) -> String {
        format!("auth:blacklist:user:{user_id}")
    }

    async fn get_conn(&self) -> Result<deadpool_redis::Connection, TokenRepositoryError> {
        self.pool
            .get()
            .await
            .map_err(|e| TokenRepositoryError::StoreError(format!("Pool error: {}", e)))
    }
}

#[async_trait]
impl TokenRepository for RedisTokenRepository {
    async fn blacklist_token(
        &self,
        token_hash: String,
        user_id: Uuid,
        expires_at: DateTime<Utc>,
    ) -> Result<(), TokenRepositoryError> {
        let ttl = (expires_at - Utc::now()).num_seconds();
        if ttl <= 0 {
            // An expired token needs no entry; the verifier refuses it anyway.
            return Ok(());
        }

        let token_key = Self::token_key(&token_hash);
        let user_key = Self::user_key(user_id);

        let mut conn = self.get_conn().await?;

        // MULTI/EXEC so the token key and the user index never diverge.
        deadpool_redis::redis::pipe()
            .atomic()
            .cmd("SET")
            .arg(&token_key)
            .arg(user_id.to_string())
            .ignore()
            .cmd("EXPIRE")
            .arg(&token_key)
            .arg(ttl)
            .ignore()
            .cmd("SADD")
            .arg(&user_key)
            .arg(&token_hash)
            .ignore()
            .cmd("EXPIRE")
            .arg(&user_key)
            .arg(ttl)
            .ignore()
            .query_async::<()>(&mut *conn)
            .await
            .map_err(|e| TokenRepositoryError::StoreError(e.to_string()))?;

        Ok(())
    }

    async fn is_token_blacklisted(&self, token_hash: &str) -> Result<bool, TokenRepositoryError> {
        let key = Self::token_key(token_hash);
        let mut conn = self.get_conn().await?;

        let exists: bool = conn
            .exists(key)
            .await
            .map_err(|e| TokenRepositoryError::StoreError(e.to_string()))?;

        Ok(exists)
    }

    async fn revoke_all_user_tokens(&self, user_id: Uuid) -> Result<(), TokenRepositoryError> {
        let user_key = Self::user_key(user_id);
        let mut conn = self.get_conn().await?;

        let tokens: Vec<String> = conn
            .smembers(&user_key)
            .await
            .map_err(|e| TokenRepositoryError::StoreError(e.to_string()))?;

        let mut pipe = deadpool_redis::redis::pipe();
        pipe.atomic();

        for token in tokens {
            pipe.del(Self::token_key(&token)).ignore();
        }

        pipe.del(&user_key).ignore();

        pipe.query_async::<()>(&mut *conn)
            .await
            .map_err(|e| TokenRepositoryError::StoreError(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::RedisTokenRepository;
    use crate::auth::application::ports::outgoing::TokenRepository;
    use chrono::{Duration, Utc};
    use std::sync::Once;
    use uuid::Uuid;

    static TLS_INIT: Once = Once::new();

    fn init_tls() {
        TLS_INIT.call_once(|| {
            rustls::crypto::ring::default_provider()
                .install_default()
                .expect("install rustls ring provider");
        });
    }

    async fn setup_repo() -> RedisTokenRepository {
        init_tls();
        let redis_url = match std::env::var("REDIS_URL") {
            Ok(v) => v,
            Err(_) => {
                eprintln!("REDIS_URL not set; skipping Redis integration tests");
                std::process::exit(0);
            }
        };

        let redis_pool = deadpool_redis::Config::from_url(&redis_url)
            .create_pool(Some(deadpool_redis::Runtime::Tokio1))
            .expect("Failed to create Redis pool");

        RedisTokenRepository::new(std::sync::Arc::new(redis_pool))
    }

    #[tokio::test]
    async fn blacklist_token_marks_token_as_blacklisted() {
        let repo = setup_repo().await;

        let token = "token_blacklist_1";
        let user_id = Uuid::new_v4();

        repo.blacklist_token(
            token.to_string(),
            user_id,
            Utc::now() + Duration::seconds(30),
        )
        .await
        .unwrap();

        let is_blacklisted = repo.is_token_blacklisted(token).await.unwrap();
        assert!(is_blacklisted);
    }

    #[tokio::test]
    async fn blacklisted_token_expires_automatically() {
        let repo = setup_repo().await;

        let token = "token_expiry_1";
        let user_id = Uuid::new_v4();

        // TTL long enough to survive truncation and scheduling.
        repo.blacklist_token(
            token.to_string(),
            user_id,
            Utc::now() + Duration::seconds(3),
        )
        .await
        .unwrap();

        tokio::time::sleep(std::time::Duration::from_secs(4)).await;

        let is_blacklisted = repo.is_token_blacklisted(token).await.unwrap();
        assert!(!is_blacklisted);
    }

    #[tokio::test]
    async fn an_already_expired_token_is_skipped() {
        let repo = setup_repo().await;

        let token = "token_already_expired";
        let result = repo
            .blacklist_token(
                token.to_string(),
                Uuid::new_v4(),
                Utc::now() - Duration::seconds(10),
            )
            .await;

        assert!(result.is_ok());
        assert!(!repo.is_token_blacklisted(token).await.unwrap());
    }

    #[tokio::test]
    async fn revoke_all_user_tokens_removes_all_tokens() {
        let repo = setup_repo().await;
        let user_id = Uuid::new_v4();

        let tokens = vec!["t1", "t2", "t3"];

        for t in &tokens {
            repo.blacklist_token(t.to_string(), user_id, Utc::now() + Duration::seconds(60))
                .await
                .unwrap();
        }

        repo.revoke_all_user_tokens(user_id).await.unwrap();

        for t in &tokens {
            assert!(!repo.is_token_blacklisted(t).await.unwrap());
        }
    }

    #[tokio::test]
    async fn revoke_user_with_no_tokens_is_noop() {
        let repo = setup_repo().await;
        let user_id = Uuid::new_v4();

        let result = repo.revoke_all_user_tokens(user_id).await;
        assert!(result.is_ok());
    }
}
