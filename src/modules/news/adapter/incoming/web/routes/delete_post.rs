use actix_web::{delete, web, Responder};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::news::application::ports::incoming::use_cases::DeletePostError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/news/{id}")]
pub async fn delete_post_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let post_id = path.into_inner();

    info!(post_id = %post_id, caller_id = %user.user_id, "Post deletion");

    match data
        .news
        .delete_post
        .execute(post_id, user.user_id, user.role)
        .await
    {
        Ok(()) => ApiResponse::<()>::no_content(),

        Err(DeletePostError::PostNotFound) => {
            ApiResponse::not_found("POST_NOT_FOUND", "News post not found")
        }

        Err(DeletePostError::Forbidden) => {
            warn!(post_id = %post_id, caller_id = %user.user_id, "Deletion by a non-author");
            ApiResponse::forbidden(
                "FORBIDDEN",
                "Only the author or an admin may modify this post",
            )
        }

        Err(DeletePostError::RepositoryError(ref e)) => {
            error!(error = %e, "Post deletion failed");
            ApiResponse::internal_error()
        }
    }
}
