use actix_web::{web, HttpResponse, Result};
use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use sea_orm::{DatabaseConnection, TransactionTrait};
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::Role;
use crate::auth::application::ports::outgoing::token_provider::TokenClaims;

#[derive(Serialize)]
pub struct RandomAccountResponse {
    email: String,
    username: String,
    password: String,
}

#[derive(Serialize)]
pub struct CleanupResponse {
    deleted_posts: u64,
    deleted_slots: u64,
    deleted_users: u64,
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    environment: String,
}

#[derive(Serialize)]
pub struct TokenResponse {
    token: String,
}

#[derive(Debug)]
enum TokenKind {
    Valid,
    Expired,
    NotYetValid,
    InvalidSignature,
    Malformed,
}

impl std::str::FromStr for TokenKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Valid" => Ok(TokenKind::Valid),
            "Expired" => Ok(TokenKind::Expired),
            "NotYetValid" => Ok(TokenKind::NotYetValid),
            "InvalidSignature" => Ok(TokenKind::InvalidSignature),
            "Malformed" => Ok(TokenKind::Malformed),
            _ => Err(format!("Unknown token_kind: {}", s)),
        }
    }
}

#[derive(Debug)]
enum TokenType {
    Access,
    Refresh,
}

impl std::str::FromStr for TokenType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "access" => Ok(TokenType::Access),
            "refresh" => Ok(TokenType::Refresh),
            _ => Err(format!("Unknown token_type: {}", s)),
        }
    }
}

impl TokenType {
    fn as_str(&self) -> &str {
        match self {
            TokenType::Access => "access",
            TokenType::Refresh => "refresh",
        }
    }
}

/// Generate random test credentials
/// GET /test/account/random
pub async fn generate_random_account() -> Result<HttpResponse> {
    let ts = chrono::Utc::now().timestamp();

    // Generate random suffix
    let random_suffix: String = (0..4)
        .map(|_| format!("{:x}", rand::random::<u8>() % 16))
        .collect();
    let random_suffix2: String = (0..4)
        .map(|_| format!("{:x}", rand::random::<u8>() % 16))
        .collect();

    let email = format!("user{}.{}@example.test", ts, random_suffix2);
    let username = format!("user_{}_{}", ts, random_suffix);

    // Ensure username is within bounds (3-50 chars)
    let safe_username = if username.len() > 50 {
        username[..50].to_string()
    } else {
        username
    };

    // Generate password (minimum 12 chars)
    let password = format!("{}{}", ts, random_suffix);
    let password = if password.len() < 12 {
        format!("{}_{}", password, random_suffix)
    } else {
        password
    };

    Ok(HttpResponse::Ok().json(RandomAccountResponse {
        email,
        username: safe_username,
        password,
    }))
}

/// Cleanup test data for a user
/// DELETE /test/cleanup/all/{user_id}
///
/// Removes everything the user touched: likes and comments (their own and
/// those hanging off their posts), their posts, the slots they teach, their
/// subject assignments, then the row itself.
pub async fn cleanup_test_user(
    user_id: web::Path<Uuid>,
    db: web::Data<Arc<DatabaseConnection>>,
) -> Result<HttpResponse> {
    use sea_orm::{ConnectionTrait, Statement};

    let user_id = user_id.into_inner();

    let txn = db.as_ref().begin().await.map_err(|e| {
        actix_web::error::ErrorInternalServerError(format!("Transaction error: {}", e))
    })?;

    let statements = [
        "DELETE FROM news_likes WHERE user_id = $1 \
         OR post_id IN (SELECT id FROM news_posts WHERE author_id = $1)",
        "DELETE FROM news_comments WHERE author_id = $1 \
         OR post_id IN (SELECT id FROM news_posts WHERE author_id = $1)",
    ];
    for sql in statements {
        txn.execute(Statement::from_sql_and_values(
            sea_orm::DatabaseBackend::Postgres,
            sql,
            vec![user_id.into()],
        ))
        .await
        .map_err(|e| {
            actix_web::error::ErrorInternalServerError(format!("Cleanup failed: {}", e))
        })?;
    }

    let posts_result = txn
        .execute(Statement::from_sql_and_values(
            sea_orm::DatabaseBackend::Postgres,
            "DELETE FROM news_posts WHERE author_id = $1",
            vec![user_id.into()],
        ))
        .await
        .map_err(|e| {
            actix_web::error::ErrorInternalServerError(format!("Failed to delete posts: {}", e))
        })?;

    let slots_result = txn
        .execute(Statement::from_sql_and_values(
            sea_orm::DatabaseBackend::Postgres,
            "DELETE FROM schedule_slots WHERE teacher_id = $1",
            vec![user_id.into()],
        ))
        .await
        .map_err(|e| {
            actix_web::error::ErrorInternalServerError(format!("Failed to delete slots: {}", e))
        })?;

    txn.execute(Statement::from_sql_and_values(
        sea_orm::DatabaseBackend::Postgres,
        "DELETE FROM teacher_subjects WHERE teacher_id = $1",
        vec![user_id.into()],
    ))
    .await
    .map_err(|e| {
        actix_web::error::ErrorInternalServerError(format!("Failed to delete assignments: {}", e))
    })?;

    let user_result = txn
        .execute(Statement::from_sql_and_values(
            sea_orm::DatabaseBackend::Postgres,
            "DELETE FROM users WHERE id = $1",
            vec![user_id.into()],
        ))
        .await
        .map_err(|e| {
            actix_web::error::ErrorInternalServerError(format!("Failed to delete user: {}", e))
        })?;

    if user_result.rows_affected() == 0 {
        txn.rollback().await.ok();
        return Ok(HttpResponse::NotFound().json(serde_json::json!({
            "error": "User not found"
        })));
    }

    txn.commit()
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(format!("Commit failed: {}", e)))?;

    Ok(HttpResponse::Ok().json(CleanupResponse {
        deleted_posts: posts_result.rows_affected(),
        deleted_slots: slots_result.rows_affected(),
        deleted_users: user_result.rows_affected(),
    }))
}

/// Health check for test helpers
/// GET /test/health
pub async fn health_check() -> Result<HttpResponse> {
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Additional safety check
    if env == "production" {
        tracing::error!("🚨 Test helper routes active in production!");
        return Ok(HttpResponse::InternalServerError().json(serde_json::json!({
            "status": "error",
            "reason": "test-helper-running-in-production"
        })));
    }

    Ok(HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        environment: env,
    }))
}

/// Generate test JWT tokens with various states (Valid, Expired, NotYetValid, InvalidSignature, Malformed)
/// GET /test/token/{token_type}/{token_kind}/{user_id}?role=teacher
pub async fn generate_test_token(
    path: web::Path<(String, String, String)>,
    query: web::Query<std::collections::HashMap<String, String>>,
) -> Result<HttpResponse> {
    let (token_type_str, token_kind_str, user_id_str) = path.into_inner();

    // Parse user_id
    let user_id = Uuid::parse_str(&user_id_str)
        .map_err(|_| actix_web::error::ErrorBadRequest("Invalid UUID format"))?;

    // Parse token_type
    let token_type: TokenType = token_type_str
        .parse()
        .map_err(|e: String| actix_web::error::ErrorBadRequest(e))?;

    // Parse token_kind
    let token_kind: TokenKind = token_kind_str
        .parse()
        .map_err(|e: String| actix_web::error::ErrorBadRequest(e))?;

    // Role claim, defaulting to student
    let role: Role = match query.get("role") {
        Some(raw) => raw
            .parse()
            .map_err(|_| actix_web::error::ErrorBadRequest("Unknown role"))?,
        None => Role::Student,
    };

    tracing::debug!(
        "Generating test token - Type: {}, Kind: {:?}, User ID: {}, Role: {}",
        token_type.as_str(),
        token_kind,
        user_id,
        role.as_str()
    );

    // Get JWT secret from environment (must match production config)
    let valid_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| "test-secret".to_string());

    // Intentionally wrong secret for InvalidSignature testing
    let invalid_secret = "wrong-secret";

    let now = Utc::now().timestamp();

    let (claims, secret) = match token_kind {
        TokenKind::Valid => {
            let claims = TokenClaims {
                sub: user_id,
                exp: now + 3600,
                iat: now,
                nbf: now - 32,
                token_type: token_type.as_str().to_string(),
                role,
            };
            (claims, valid_secret.as_str())
        }
        TokenKind::Expired => {
            let claims = TokenClaims {
                sub: user_id,
                iat: now - 7200,
                nbf: now - 7200,
                exp: now - 60, // Expired 60 seconds ago
                token_type: token_type.as_str().to_string(),
                role,
            };
            (claims, valid_secret.as_str())
        }
        TokenKind::NotYetValid => {
            let claims = TokenClaims {
                sub: user_id,
                iat: now,
                nbf: now + 300, // Not valid for another 5 minutes (> 30s leeway)
                exp: now + 3600,
                token_type: token_type.as_str().to_string(),
                role,
            };
            (claims, valid_secret.as_str())
        }
        TokenKind::InvalidSignature => {
            let claims = TokenClaims {
                sub: user_id,
                iat: now,
                nbf: now,
                exp: now + 3600,
                token_type: token_type.as_str().to_string(),
                role,
            };
            (claims, invalid_secret)
        }
        TokenKind::Malformed => {
            // Return a completely malformed token
            let malformed_token = format!("malformed.{}.token", Uuid::new_v4());
            return Ok(HttpResponse::Ok().json(TokenResponse {
                token: malformed_token,
            }));
        }
    };

    // Encode the token
    let encoding_key = EncodingKey::from_secret(secret.as_bytes());
    let token = encode(&Header::new(Algorithm::HS256), &claims, &encoding_key).map_err(|e| {
        actix_web::error::ErrorInternalServerError(format!("Token encoding error: {}", e))
    })?;

    Ok(HttpResponse::Ok().json(TokenResponse { token }))
}

/// Configure test helper routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/test")
            .route("/health", web::get().to(health_check))
            .route("/account/random", web::get().to(generate_random_account))
            .route(
                "/cleanup/all/{user_id}",
                web::delete().to(cleanup_test_user),
            )
            .route(
                "/token/{token_type}/{token_kind}/{user_id}",
                web::get().to(generate_test_token),
            ),
    );
}
