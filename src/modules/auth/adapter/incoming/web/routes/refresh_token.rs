use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};

use crate::auth::application::ports::incoming::use_cases::RefreshTokenError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct RefreshTokenRequestDto {
    pub refresh_token: String,
}

#[post("/api/auth/refresh")]
pub async fn refresh_token_handler(
    req: web::Json<RefreshTokenRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    info!("Token refresh attempt");

    if dto.refresh_token.trim().is_empty() {
        return ApiResponse::bad_request("VALIDATION_ERROR", "Refresh token cannot be empty");
    }

    match data.auth.refresh.execute(&dto.refresh_token).await {
        Ok(pair) => {
            info!("Token pair rotated");
            ApiResponse::success(pair)
        }

        Err(RefreshTokenError::TokenRevoked) => {
            warn!("Token refresh failed: token on the revocation list");
            ApiResponse::unauthorized("TOKEN_REVOKED", "This session has been logged out")
        }

        Err(RefreshTokenError::InvalidToken(ref e)) => {
            warn!(reason = %e, "Token refresh failed: invalid token");
            ApiResponse::unauthorized("INVALID_TOKEN", "Invalid or expired refresh token")
        }

        Err(RefreshTokenError::GenerationFailed(ref e)) => {
            error!(error = %e, "Token generation failed during refresh");
            ApiResponse::internal_error()
        }

        Err(RefreshTokenError::StoreError(ref e)) => {
            error!(error = %e, "Revocation store unreachable during refresh");
            ApiResponse::internal_error()
        }
    }
}
