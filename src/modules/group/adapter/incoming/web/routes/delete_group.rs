use actix_web::{delete, web, Responder};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::group::application::ports::incoming::use_cases::DeleteGroupError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/admin/groups/{id}")]
pub async fn delete_group_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let group_id = path.into_inner();

    info!(group_id = %group_id, "Group deletion");

    match data.groups.delete.execute(group_id).await {
        Ok(()) => ApiResponse::<()>::no_content(),

        Err(DeleteGroupError::GroupNotFound) => {
            ApiResponse::not_found("GROUP_NOT_FOUND", "Group not found")
        }

        Err(DeleteGroupError::GroupInUse) => {
            warn!(group_id = %group_id, "Deletion refused, group still referenced");
            ApiResponse::conflict(
                "GROUP_IN_USE",
                "Group still has students or schedule slots",
            )
        }

        Err(DeleteGroupError::RepositoryError(ref e)) => {
            error!(error = %e, "Group deletion failed");
            ApiResponse::internal_error()
        }
    }
}
