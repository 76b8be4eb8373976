use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::auth::application::domain::entities::ReviewDecision;
use crate::auth::application::ports::incoming::use_cases::{
    ReviewRegistrationCommand, ReviewRegistrationError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, ToSchema)]
pub struct ReviewRequestDto {
    /// "approved" or "rejected".
    #[schema(example = "approved")]
    pub decision: String,
}

//
// ──────────────────────────────────────────────────────────
// Response DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Serialize, ToSchema)]
pub struct ReviewedUserResponse {
    pub id: Uuid,

    #[schema(example = "ivan.petrov")]
    pub username: String,

    #[schema(example = "student")]
    pub role: String,

    #[schema(example = "approved")]
    pub status: String,
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// Review a registration
///
/// Approves or rejects a pending registration. Both outcomes are final;
/// reviewing the same user twice fails.
#[utoipa::path(
    post,
    path = "/api/admin/registrations/{user_id}/review",
    tag = "admin",
    security(("BearerAuth" = [])),
    params(("user_id" = Uuid, Path, description = "The registration under review")),
    request_body = ReviewRequestDto,
    responses(
        (
            status = 200,
            description = "Decision recorded",
            body = inline(SuccessResponse<ReviewedUserResponse>),
            example = json!({
                "success": true,
                "data": {
                    "id": "5f8d7a2e-4c1b-4f62-9d3a-8e2b0c6f1a47",
                    "username": "ivan.petrov",
                    "role": "student",
                    "status": "approved"
                }
            })
        ),
        (
            status = 404,
            description = "No such user",
            body = ErrorResponse,
        ),
        (
            status = 409,
            description = "Registration was reviewed before",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "ALREADY_REVIEWED",
                    "message": "Registration was already Approved"
                }
            })
        ),
    )
)]
#[post("/api/admin/registrations/{user_id}/review")]
pub async fn review_registration_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<ReviewRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = path.into_inner();
    let dto = req.into_inner();

    let decision = match dto.decision.as_str() {
        "approved" => ReviewDecision::Approved,
        "rejected" => ReviewDecision::Rejected,
        _ => {
            return ApiResponse::bad_request(
                "VALIDATION_ERROR",
                "Decision must be approved or rejected",
            )
        }
    };

    info!(user_id = %user_id, decision = ?decision, "Registration review");

    let command = ReviewRegistrationCommand::new(user_id, decision);

    match data.auth.review.execute(command).await {
        Ok(user) => {
            info!(user_id = %user.id, status = user.status.as_str(), "Review recorded");

            ApiResponse::success(ReviewedUserResponse {
                id: user.id.value(),
                username: user.username,
                role: user.assignment.role().as_str().to_string(),
                status: user.status.as_str().to_string(),
            })
        }

        Err(ReviewRegistrationError::UserNotFound) => {
            warn!(user_id = %user_id, "Review of an unknown user");
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(ReviewRegistrationError::AlreadyReviewed(status)) => {
            warn!(user_id = %user_id, status = ?status, "Second review refused");
            ApiResponse::conflict(
                "ALREADY_REVIEWED",
                &format!("Registration was already {:?}", status),
            )
        }

        Err(ReviewRegistrationError::RepositoryError(ref e)) => {
            error!(error = %e, "Review could not be stored");
            ApiResponse::internal_error()
        }
    }
}
