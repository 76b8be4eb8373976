use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::subject::application::domain::entities::SubjectWithTeachers;
use crate::subject::application::ports::incoming::use_cases::ListSubjectsError;
use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct SubjectTeacherDto {
    pub id: Uuid,

    #[schema(example = "prof_kovacs")]
    pub username: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SubjectDto {
    pub id: Uuid,

    #[schema(example = "Linear Algebra")]
    pub name: String,

    pub teachers: Vec<SubjectTeacherDto>,
}

impl From<SubjectWithTeachers> for SubjectDto {
    fn from(subject: SubjectWithTeachers) -> Self {
        Self {
            id: subject.id,
            name: subject.name,
            teachers: subject
                .teachers
                .into_iter()
                .map(|t| SubjectTeacherDto {
                    id: t.id,
                    username: t.username,
                })
                .collect(),
        }
    }
}

/// List subjects
///
/// The catalog of taught subjects together with the teachers assigned to
/// each, visible to every authenticated identity.
#[utoipa::path(
    get,
    path = "/api/subjects",
    tag = "subjects",
    security(("BearerAuth" = [])),
    responses(
        (
            status = 200,
            description = "All subjects with their teacher assignments",
            body = inline(SuccessResponse<Vec<SubjectDto>>),
            example = json!({
                "success": true,
                "data": [
                    {
                        "id": "4cf3f6f4-7f05-4f6e-9d51-2b6b1a3e8f90",
                        "name": "Linear Algebra",
                        "teachers": [
                            { "id": "c1a9a1de-93f1-4a8f-8f6e-55b1d2f4e7aa", "username": "prof_kovacs" }
                        ]
                    }
                ]
            })
        ),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    )
)]
#[get("/api/subjects")]
pub async fn list_subjects_handler(
    _user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.subjects.list.execute().await {
        Ok(subjects) => {
            ApiResponse::success(subjects.into_iter().map(SubjectDto::from).collect::<Vec<_>>())
        }

        Err(ListSubjectsError::QueryFailed(ref e)) => {
            error!(error = %e, "Subject listing failed");
            ApiResponse::internal_error()
        }
    }
}
