use actix_web::{post, web, HttpRequest, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::ports::incoming::use_cases::{LogoutCommand, LogoutError};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct LogoutRequestDto {
    /// The session's refresh token, revoked together with the access token.
    #[serde(default)]
    pub refresh_token: Option<String>,
}

/// The access token to revoke is the one this request authenticated with.
#[post("/api/auth/logout")]
pub async fn logout_user_handler(
    user: AuthenticatedUser,
    http_req: HttpRequest,
    req: Option<web::Json<LogoutRequestDto>>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.map(web::Json::into_inner).unwrap_or_default();

    info!(user_id = %user.user_id, "Logout attempt");

    let access_token = http_req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .unwrap_or_default()
        .to_string();

    let command = match LogoutCommand::new(access_token, dto.refresh_token) {
        Ok(c) => c,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.auth.logout.execute(command).await {
        Ok(()) => {
            info!(user_id = %user.user_id, "Tokens revoked");
            ApiResponse::success(serde_json::json!({ "message": "Logged out" }))
        }

        Err(LogoutError::InvalidToken) => {
            warn!("Logout failed: token did not verify");
            ApiResponse::unauthorized("INVALID_TOKEN", "Invalid or expired token")
        }

        Err(LogoutError::StoreError(ref e)) => {
            error!(error = %e, "Revocation store unreachable during logout");
            ApiResponse::internal_error()
        }
    }
}
