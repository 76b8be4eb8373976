use actix_web::{delete, web, Responder};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::shared::api::ApiResponse;
use crate::subject::application::ports::incoming::use_cases::DeleteSubjectError;
use crate::AppState;

#[delete("/api/admin/subjects/{id}")]
pub async fn delete_subject_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let subject_id = path.into_inner();

    info!(subject_id = %subject_id, "Subject deletion");

    match data.subjects.delete.execute(subject_id).await {
        Ok(()) => ApiResponse::<()>::no_content(),

        Err(DeleteSubjectError::SubjectNotFound) => {
            ApiResponse::not_found("SUBJECT_NOT_FOUND", "Subject not found")
        }

        Err(DeleteSubjectError::SubjectInUse) => {
            warn!(subject_id = %subject_id, "Deletion refused, subject still scheduled");
            ApiResponse::conflict("SUBJECT_IN_USE", "Subject is still used by schedule slots")
        }

        Err(DeleteSubjectError::RepositoryError(ref e)) => {
            error!(error = %e, "Subject deletion failed");
            ApiResponse::internal_error()
        }
    }
}
