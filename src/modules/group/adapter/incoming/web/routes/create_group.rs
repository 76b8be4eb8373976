use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::group::application::ports::incoming::use_cases::{CreateGroupCommand, CreateGroupError};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateGroupRequestDto {
    pub name: String,
    pub course: i16,
}

#[post("/api/admin/groups")]
pub async fn create_group_handler(
    _admin: AdminUser,
    req: web::Json<CreateGroupRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    info!(name = %dto.name, course = dto.course, "Group creation");

    let command = match CreateGroupCommand::new(dto.name, dto.course) {
        Ok(c) => c,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.groups.create.execute(command).await {
        Ok(group) => {
            info!(group_id = %group.id, "Group created");
            ApiResponse::created(group)
        }

        Err(CreateGroupError::GroupAlreadyExists) => {
            warn!("Group creation refused: name and course taken");
            ApiResponse::conflict(
                "GROUP_ALREADY_EXISTS",
                "A group with that name and course already exists",
            )
        }

        Err(CreateGroupError::RepositoryError(ref e)) => {
            error!(error = %e, "Group creation failed");
            ApiResponse::internal_error()
        }
    }
}
