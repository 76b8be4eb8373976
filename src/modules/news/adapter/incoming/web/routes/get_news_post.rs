use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::news::application::ports::incoming::use_cases::GetNewsPostError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/news/{id}")]
pub async fn get_news_post_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let post_id = path.into_inner();

    match data.news.detail.execute(post_id, user.user_id).await {
        Ok(detail) => ApiResponse::success(detail),

        Err(GetNewsPostError::PostNotFound) => {
            ApiResponse::not_found("POST_NOT_FOUND", "News post not found")
        }

        Err(GetNewsPostError::QueryFailed(ref e)) => {
            error!(error = %e, post_id = %post_id, "Post fetch failed");
            ApiResponse::internal_error()
        }
    }
}
