use actix_web::{delete, web, Responder};
use tracing::{error, info, warn};

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::ports::incoming::use_cases::DeleteAccountError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Self-service deletion of the caller's own account. Takes the user's
/// posts, comments and likes with it and revokes outstanding tokens.
#[delete("/api/profile")]
pub async fn delete_account_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    info!(user_id = %user.user_id, "Account deletion");

    match data.auth.delete_account.execute(user.user_id).await {
        Ok(()) => {
            info!(user_id = %user.user_id, "Account deleted");
            ApiResponse::no_content()
        }

        Err(DeleteAccountError::UserNotFound) => {
            warn!(user_id = %user.user_id, "Deletion for a vanished user");
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(DeleteAccountError::TeacherInSchedule) => ApiResponse::conflict(
            "TEACHER_IN_SCHEDULE",
            "Account is still assigned to schedule slots",
        ),

        Err(DeleteAccountError::RepositoryError(ref e)) => {
            error!(error = %e, "Account deletion failed");
            ApiResponse::internal_error()
        }
    }
}
