use actix_web::{post, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::news::application::ports::incoming::use_cases::ToggleLikeError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[post("/api/news/{id}/like")]
pub async fn toggle_like_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let post_id = path.into_inner();

    match data.news.toggle_like.execute(post_id, user.user_id).await {
        Ok(status) => ApiResponse::success(status),

        Err(ToggleLikeError::PostNotFound) => {
            ApiResponse::not_found("POST_NOT_FOUND", "News post not found")
        }

        Err(ToggleLikeError::RepositoryError(ref e)) => {
            error!(error = %e, post_id = %post_id, "Like toggle failed");
            ApiResponse::internal_error()
        }
    }
}
