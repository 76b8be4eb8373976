use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::shared::api::ApiResponse;
use crate::subject::application::ports::incoming::use_cases::{
    CreateSubjectCommand, CreateSubjectError,
};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateSubjectRequestDto {
    pub name: String,

    #[serde(default)]
    pub teacher_ids: Vec<Uuid>,
}

#[post("/api/admin/subjects")]
pub async fn create_subject_handler(
    _admin: AdminUser,
    req: web::Json<CreateSubjectRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    info!(name = %dto.name, teachers = dto.teacher_ids.len(), "Subject creation");

    let command = match CreateSubjectCommand::new(dto.name, dto.teacher_ids) {
        Ok(c) => c,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.subjects.create.execute(command).await {
        Ok(subject) => ApiResponse::created(subject),

        Err(CreateSubjectError::SubjectAlreadyExists) => {
            ApiResponse::conflict("SUBJECT_ALREADY_EXISTS", "A subject with that name already exists")
        }

        Err(CreateSubjectError::TeacherNotFound) => {
            warn!("Subject references an unknown teacher id");
            ApiResponse::not_found("TEACHER_NOT_FOUND", "Teacher not found")
        }

        Err(CreateSubjectError::NotATeacher) => {
            warn!("Subject assignment points at a non-teacher identity");
            ApiResponse::bad_request("NOT_A_TEACHER", "Referenced identity is not a teacher")
        }

        Err(CreateSubjectError::RepositoryError(ref e)) => {
            error!(error = %e, "Subject creation failed");
            ApiResponse::internal_error()
        }
    }
}
