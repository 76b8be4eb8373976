use actix_web::{get, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::domain::entities::{Course, Role, RoleAssignment};
use crate::auth::application::ports::incoming::use_cases::FetchProfileError;
use crate::schedule::application::domain::entities::SlotView;
use crate::schedule::application::ports::incoming::use_cases::GetScheduleError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct ScheduleQuery {
    /// Group whose timetable to fetch. Omit together with `course` to get
    /// your own week (students and teachers only).
    pub group_id: Option<Uuid>,

    /// Course year the timetable belongs to.
    pub course: Option<i16>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ScheduleSlotDto {
    pub id: Uuid,
    pub group_id: Uuid,

    #[schema(example = "CS-201")]
    pub group_name: String,

    pub subject_id: Uuid,

    #[schema(example = "Linear Algebra")]
    pub subject_name: String,

    pub teacher_id: Uuid,

    #[schema(example = "prof_kovacs")]
    pub teacher_name: String,

    #[schema(example = 2)]
    pub course: i16,

    /// 0 = Monday through 6 = Sunday.
    #[schema(example = 1)]
    pub weekday: i16,

    #[schema(example = "09:00")]
    pub start_time: String,

    #[schema(example = "10:30")]
    pub end_time: String,
}

impl From<SlotView> for ScheduleSlotDto {
    fn from(slot: SlotView) -> Self {
        Self {
            id: slot.id,
            group_id: slot.group_id,
            group_name: slot.group_name,
            subject_id: slot.subject_id,
            subject_name: slot.subject_name,
            teacher_id: slot.teacher_id,
            teacher_name: slot.teacher_name,
            course: slot.course.value(),
            weekday: slot.weekday.value(),
            start_time: slot.start_time.format("%H:%M").to_string(),
            end_time: slot.end_time.format("%H:%M").to_string(),
        }
    }
}

fn render(result: Result<Vec<SlotView>, GetScheduleError>) -> HttpResponse {
    match result {
        Ok(slots) => {
            ApiResponse::success(slots.into_iter().map(ScheduleSlotDto::from).collect::<Vec<_>>())
        }

        Err(GetScheduleError::QueryFailed(ref e)) => {
            error!(error = %e, "Schedule fetch failed");
            ApiResponse::internal_error()
        }
    }
}

/// Fetch a weekly timetable
///
/// With `group_id` and `course` set, any authenticated identity gets that
/// group's week. With neither set, a student gets their own group's week
/// and a teacher gets the slots they teach; admins must always name a
/// group. Slots come back ordered by weekday, then start time.
#[utoipa::path(
    get,
    path = "/api/schedule",
    tag = "schedule",
    security(("BearerAuth" = [])),
    params(ScheduleQuery),
    responses(
        (
            status = 200,
            description = "The requested week",
            body = inline(SuccessResponse<Vec<ScheduleSlotDto>>),
            example = json!({
                "success": true,
                "data": [{
                    "id": "3d1f9c2e-5b7a-4e8d-9c6f-1a2b3c4d5e6f",
                    "group_id": "0e2cda2a-91a8-4a07-b6da-80600dcdc1f8",
                    "group_name": "CS-201",
                    "subject_id": "4cf3f6f4-7f05-4f6e-9d51-2b6b1a3e8f90",
                    "subject_name": "Linear Algebra",
                    "teacher_id": "c1a9a1de-93f1-4a8f-8f6e-55b1d2f4e7aa",
                    "teacher_name": "prof_kovacs",
                    "course": 2,
                    "weekday": 1,
                    "start_time": "09:00",
                    "end_time": "10:30"
                }]
            })
        ),
        (status = 400, description = "Incomplete or out-of-range filter", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    )
)]
#[get("/api/schedule")]
pub async fn get_schedule_handler(
    user: AuthenticatedUser,
    query: web::Query<ScheduleQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let filter = query.into_inner();

    match (filter.group_id, filter.course) {
        (Some(group_id), Some(course)) => {
            let course = match Course::new(course) {
                Ok(c) => c,
                Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
            };

            render(data.schedule.get_group.execute(group_id, course).await)
        }

        (None, None) => match user.role {
            Role::Teacher => render(data.schedule.get_teacher.execute(user.user_id).await),

            // A student's own week is their group's week; the group and
            // course come from their stored assignment, not the token.
            Role::Student => match data.auth.fetch_profile.execute(user.user_id).await {
                Ok(profile) => match profile.user.assignment {
                    RoleAssignment::Student { group_id, course } => {
                        render(data.schedule.get_group.execute(group_id, course).await)
                    }
                    _ => {
                        error!(user_id = %user.user_id, "Token role does not match stored assignment");
                        ApiResponse::internal_error()
                    }
                },

                Err(FetchProfileError::UserNotFound) => {
                    ApiResponse::not_found("USER_NOT_FOUND", "User not found")
                }

                Err(FetchProfileError::RepositoryError(ref e)) => {
                    error!(error = %e, "Assignment lookup failed");
                    ApiResponse::internal_error()
                }
            },

            Role::Admin => ApiResponse::bad_request(
                "VALIDATION_ERROR",
                "Admins must name a group_id and course",
            ),
        },

        _ => ApiResponse::bad_request(
            "VALIDATION_ERROR",
            "Provide both group_id and course, or neither",
        ),
    }
}
