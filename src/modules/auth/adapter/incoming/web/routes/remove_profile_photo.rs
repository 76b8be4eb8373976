use actix_web::{delete, web, Responder};
use tracing::{error, info, warn};

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::ports::incoming::use_cases::RemoveProfilePhotoError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Removing when no photo is set succeeds quietly.
#[delete("/api/profile/photo")]
pub async fn remove_profile_photo_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    info!(user_id = %user.user_id, "Photo removal");

    match data.auth.remove_photo.execute(user.user_id).await {
        Ok(()) => ApiResponse::no_content(),

        Err(RemoveProfilePhotoError::UserNotFound) => {
            warn!(user_id = %user.user_id, "Photo removal for a vanished user");
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(RemoveProfilePhotoError::RepositoryError(ref e)) => {
            error!(error = %e, "Photo removal failed");
            ApiResponse::internal_error()
        }
    }
}
