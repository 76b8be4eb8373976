use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::group::application::ports::incoming::use_cases::{UpdateGroupCommand, UpdateGroupError};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct UpdateGroupRequestDto {
    pub name: String,
    pub course: i16,
}

#[put("/api/admin/groups/{id}")]
pub async fn update_group_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<UpdateGroupRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let group_id = path.into_inner();
    let dto = req.into_inner();

    info!(group_id = %group_id, "Group update");

    let command = match UpdateGroupCommand::new(group_id, dto.name, dto.course) {
        Ok(c) => c,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.groups.update.execute(command).await {
        Ok(group) => ApiResponse::success(group),

        Err(UpdateGroupError::GroupNotFound) => {
            warn!(group_id = %group_id, "Update of an unknown group");
            ApiResponse::not_found("GROUP_NOT_FOUND", "Group not found")
        }

        Err(UpdateGroupError::GroupAlreadyExists) => {
            warn!(group_id = %group_id, "Group rename collides");
            ApiResponse::conflict(
                "GROUP_ALREADY_EXISTS",
                "A group with that name and course already exists",
            )
        }

        Err(UpdateGroupError::RepositoryError(ref e)) => {
            error!(error = %e, "Group update failed");
            ApiResponse::internal_error()
        }
    }
}
