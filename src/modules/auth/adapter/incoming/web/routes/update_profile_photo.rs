use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::ports::incoming::use_cases::{
    UpdateProfilePhotoCommand, UpdateProfilePhotoError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct PhotoUploadQuery {
    /// Original file name; only its extension matters for validation.
    pub filename: String,
}

/// The body is the raw image bytes, not multipart. The previous photo
/// file, if any, is deleted once the new one is stored.
#[put("/api/profile/photo")]
pub async fn update_profile_photo_handler(
    user: AuthenticatedUser,
    query: web::Query<PhotoUploadQuery>,
    body: web::Bytes,
    data: web::Data<AppState>,
) -> impl Responder {
    let filename = query.into_inner().filename;

    info!(user_id = %user.user_id, filename = %filename, size = body.len(), "Photo upload");

    let command = match UpdateProfilePhotoCommand::new(user.user_id, filename, body.to_vec()) {
        Ok(c) => c,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.auth.update_photo.execute(command).await {
        Ok(updated) => ApiResponse::success(updated),

        Err(UpdateProfilePhotoError::UserNotFound) => {
            warn!(user_id = %user.user_id, "Photo upload for a vanished user");
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(UpdateProfilePhotoError::StorageError(ref e)) => {
            error!(error = %e, "Photo could not be stored");
            ApiResponse::internal_error()
        }

        Err(UpdateProfilePhotoError::RepositoryError(ref e)) => {
            error!(error = %e, "Photo reference could not be saved");
            ApiResponse::internal_error()
        }
    }
}
