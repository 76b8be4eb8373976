use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::domain::entities::{Course, Role, RoleAssignment};
use crate::auth::application::ports::incoming::use_cases::{
    RegisterUserCommand, RegisterUserError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterRequestDto {
    #[schema(example = "ivan.petrov")]
    pub username: String,

    #[schema(example = "ivan.petrov@university.edu")]
    pub email: String,

    #[schema(example = "correct-horse-battery")]
    pub password: String,

    /// Requested role: student, teacher or admin.
    #[schema(example = "student")]
    pub role: String,

    /// Required for students, ignored otherwise.
    #[serde(default)]
    pub group_id: Option<Uuid>,

    /// Required for students, ignored otherwise.
    #[serde(default)]
    #[schema(example = 1)]
    pub course: Option<i16>,
}

//
// ──────────────────────────────────────────────────────────
// Response DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Serialize, ToSchema)]
pub struct RegisteredUserResponse {
    pub id: Uuid,

    #[schema(example = "ivan.petrov")]
    pub username: String,

    #[schema(example = "ivan.petrov@university.edu")]
    pub email: String,

    #[schema(example = "student")]
    pub role: String,

    /// Always "pending" until an admin reviews the registration.
    #[schema(example = "pending")]
    pub status: String,
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// Register a new account
///
/// Creates a pending identity. Nobody can log in until an admin approves
/// the registration.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "auth",
    request_body = RegisterRequestDto,
    responses(
        (
            status = 201,
            description = "Registration received, awaiting admin review",
            body = inline(SuccessResponse<RegisteredUserResponse>),
            example = json!({
                "success": true,
                "data": {
                    "id": "5f8d7a2e-4c1b-4f62-9d3a-8e2b0c6f1a47",
                    "username": "ivan.petrov",
                    "email": "ivan.petrov@university.edu",
                    "role": "student",
                    "status": "pending"
                }
            })
        ),
        (
            status = 400,
            description = "Invalid input",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "VALIDATION_ERROR",
                    "message": "Password must be at least 8 characters"
                }
            })
        ),
        (
            status = 409,
            description = "Username or email already taken",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "USER_ALREADY_EXISTS",
                    "message": "Username or email is already taken"
                }
            })
        ),
    )
)]
#[post("/api/auth/register")]
pub async fn register_user_handler(
    req: web::Json<RegisterRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    info!(username = %dto.username, role = %dto.role, "Registration attempt");

    let Ok(role) = dto.role.parse::<Role>() else {
        return ApiResponse::bad_request("VALIDATION_ERROR", "Role must be student, teacher or admin");
    };

    let assignment = match role {
        Role::Student => {
            let (Some(group_id), Some(course)) = (dto.group_id, dto.course) else {
                return ApiResponse::bad_request(
                    "VALIDATION_ERROR",
                    "Students must pick a group and a course",
                );
            };
            let course = match Course::new(course) {
                Ok(c) => c,
                Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
            };
            RoleAssignment::Student { group_id, course }
        }
        Role::Teacher => RoleAssignment::Teacher,
        Role::Admin => RoleAssignment::Admin,
    };

    let command = match RegisterUserCommand::new(dto.username, dto.email, dto.password, assignment)
    {
        Ok(c) => c,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.auth.register.execute(command).await {
        Ok(user) => {
            info!(user_id = %user.id, "Registration stored, awaiting review");

            let role = user.role().as_str().to_string();
            ApiResponse::created(RegisteredUserResponse {
                id: user.id.value(),
                username: user.username,
                email: user.email,
                role,
                status: user.status.as_str().to_string(),
            })
        }

        Err(RegisterUserError::UserAlreadyExists) => {
            warn!("Registration failed: username or email taken");
            ApiResponse::conflict("USER_ALREADY_EXISTS", "Username or email is already taken")
        }

        Err(RegisterUserError::GroupNotFound) => {
            warn!("Registration failed: group does not exist");
            ApiResponse::not_found("GROUP_NOT_FOUND", "The chosen group does not exist")
        }

        Err(RegisterUserError::HashingFailed) => {
            error!("Password hashing failed during registration");
            ApiResponse::internal_error()
        }

        Err(RegisterUserError::RepositoryError(ref e)) => {
            error!(error = %e, "Registration failed on the repository");
            ApiResponse::internal_error()
        }
    }
}
