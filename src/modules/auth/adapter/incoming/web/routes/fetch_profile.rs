use actix_web::{get, web, Responder};
use chrono::{DateTime, NaiveTime, Utc};
use serde::Serialize;
use tracing::{error, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::domain::entities::RoleAssignment;
use crate::auth::application::ports::incoming::use_cases::{FetchProfileError, UserProfile};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Response DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Serialize, ToSchema)]
pub struct ProfileResponseDto {
    pub id: Uuid,

    #[schema(example = "ivan.petrov")]
    pub username: String,

    #[schema(example = "ivan.petrov@university.edu")]
    pub email: String,

    #[schema(example = "student")]
    pub role: String,

    #[schema(example = "approved")]
    pub status: String,

    /// Present for students only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<Uuid>,

    /// Present for students only.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = 2)]
    pub course: Option<i16>,

    #[schema(example = "a3f1c2d4.png")]
    pub photo_file: Option<String>,

    pub created_at: DateTime<Utc>,

    pub posts: Vec<ProfilePostDto>,

    pub schedule: Vec<ProfileSlotDto>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProfilePostDto {
    pub id: Uuid,

    #[schema(example = "Exam schedule moved")]
    pub title: String,

    pub created_at: DateTime<Utc>,

    #[schema(example = 4)]
    pub like_count: u64,

    #[schema(example = 2)]
    pub comment_count: u64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProfileSlotDto {
    pub id: Uuid,

    /// 0 = Monday .. 6 = Sunday.
    #[schema(example = 0)]
    pub weekday: i16,

    pub start_time: NaiveTime,

    pub end_time: NaiveTime,

    #[schema(example = "Linear Algebra")]
    pub subject_name: String,

    #[schema(example = "CS-201")]
    pub group_name: String,

    #[schema(example = "maria.ivanova")]
    pub teacher_name: String,
}

impl From<UserProfile> for ProfileResponseDto {
    fn from(profile: UserProfile) -> Self {
        let (group_id, course) = match profile.user.assignment {
            RoleAssignment::Student { group_id, course } => (Some(group_id), Some(course.value())),
            RoleAssignment::Teacher | RoleAssignment::Admin => (None, None),
        };

        Self {
            id: profile.user.id.value(),
            username: profile.user.username,
            email: profile.user.email,
            role: profile.user.assignment.role().as_str().to_string(),
            status: profile.user.status.as_str().to_string(),
            group_id,
            course,
            photo_file: profile.user.photo_file,
            created_at: profile.user.created_at,
            posts: profile
                .posts
                .into_iter()
                .map(|p| ProfilePostDto {
                    id: p.id,
                    title: p.title,
                    created_at: p.created_at,
                    like_count: p.like_count,
                    comment_count: p.comment_count,
                })
                .collect(),
            schedule: profile
                .schedule
                .into_iter()
                .map(|s| ProfileSlotDto {
                    id: s.id,
                    weekday: s.weekday,
                    start_time: s.start_time,
                    end_time: s.end_time,
                    subject_name: s.subject_name,
                    group_name: s.group_name,
                    teacher_name: s.teacher_name,
                })
                .collect(),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// Own profile
///
/// Identity fields, the caller's posts newest first, and the week of
/// classes relevant to their role.
#[utoipa::path(
    get,
    path = "/api/profile",
    tag = "profile",
    security(("BearerAuth" = [])),
    responses(
        (
            status = 200,
            description = "The signed-in user's profile",
            body = inline(SuccessResponse<ProfileResponseDto>),
        ),
        (
            status = 401,
            description = "Missing or invalid token",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "MISSING_AUTH_HEADER",
                    "message": "Authorization header is missing"
                }
            })
        ),
        (
            status = 404,
            description = "The token's user no longer exists",
            body = ErrorResponse,
        ),
    )
)]
#[get("/api/profile")]
pub async fn fetch_profile_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.auth.fetch_profile.execute(user.user_id).await {
        Ok(profile) => ApiResponse::success(ProfileResponseDto::from(profile)),

        Err(FetchProfileError::UserNotFound) => {
            warn!(user_id = %user.user_id, "Profile requested for a vanished user");
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(FetchProfileError::RepositoryError(ref e)) => {
            error!(error = %e, "Profile aggregation failed");
            ApiResponse::internal_error()
        }
    }
}
