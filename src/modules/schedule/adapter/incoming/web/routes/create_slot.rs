use actix_web::{post, web, Responder};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::schedule::application::domain::entities::ScheduleSlot;
use crate::schedule::application::ports::incoming::use_cases::{CreateSlotCommand, CreateSlotError};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct SlotRequestDto {
    pub group_id: Uuid,
    pub subject_id: Uuid,
    pub teacher_id: Uuid,
    pub course: i16,
    pub weekday: i16,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Debug, Serialize)]
pub struct SlotResponseDto {
    pub id: Uuid,
    pub group_id: Uuid,
    pub subject_id: Uuid,
    pub teacher_id: Uuid,
    pub course: i16,
    pub weekday: i16,
    pub start_time: String,
    pub end_time: String,
}

impl From<ScheduleSlot> for SlotResponseDto {
    fn from(slot: ScheduleSlot) -> Self {
        Self {
            id: slot.id,
            group_id: slot.group_id,
            subject_id: slot.subject_id,
            teacher_id: slot.teacher_id,
            course: slot.course.value(),
            weekday: slot.weekday.value(),
            start_time: slot.start_time.format("%H:%M").to_string(),
            end_time: slot.end_time.format("%H:%M").to_string(),
        }
    }
}

/// Accepts "09:00" and "09:00:00"; seconds beyond that are not a thing
/// timetables deal in.
pub(crate) fn parse_time(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .ok()
}

#[post("/api/admin/schedule")]
pub async fn create_slot_handler(
    _admin: AdminUser,
    req: web::Json<SlotRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let (start_time, end_time) = match (parse_time(&dto.start_time), parse_time(&dto.end_time)) {
        (Some(s), Some(e)) => (s, e),
        _ => return ApiResponse::bad_request("VALIDATION_ERROR", "Times must be HH:MM"),
    };

    info!(
        group_id = %dto.group_id,
        weekday = dto.weekday,
        start = %dto.start_time,
        "Slot placement"
    );

    let command = match CreateSlotCommand::new(
        dto.group_id,
        dto.subject_id,
        dto.teacher_id,
        dto.course,
        dto.weekday,
        start_time,
        end_time,
    ) {
        Ok(c) => c,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.schedule.create.execute(command).await {
        Ok(slot) => ApiResponse::created(SlotResponseDto::from(slot)),

        Err(CreateSlotError::GroupConflict) => {
            warn!(group_id = %dto.group_id, "Slot overlaps the group's week");
            ApiResponse::conflict("GROUP_CONFLICT", "The group already has a class at that time")
        }

        Err(CreateSlotError::TeacherConflict) => {
            warn!(teacher_id = %dto.teacher_id, "Slot overlaps the teacher's week");
            ApiResponse::conflict(
                "TEACHER_CONFLICT",
                "The teacher already has a class at that time",
            )
        }

        Err(CreateSlotError::GroupNotFound) => {
            ApiResponse::not_found("GROUP_NOT_FOUND", "Group not found")
        }

        Err(CreateSlotError::SubjectNotFound) => {
            ApiResponse::not_found("SUBJECT_NOT_FOUND", "Subject not found")
        }

        Err(CreateSlotError::TeacherNotFound) => {
            ApiResponse::not_found("TEACHER_NOT_FOUND", "Teacher not found")
        }

        Err(CreateSlotError::NotATeacher) => {
            ApiResponse::bad_request("NOT_A_TEACHER", "Referenced identity is not a teacher")
        }

        Err(CreateSlotError::RepositoryError(ref e)) => {
            error!(error = %e, "Slot placement failed");
            ApiResponse::internal_error()
        }
    }
}
