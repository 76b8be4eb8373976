use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::news::application::ports::incoming::use_cases::{UpdatePostCommand, UpdatePostError};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct UpdatePostRequestDto {
    pub title: String,
    pub content: String,
}

#[put("/api/news/{id}")]
pub async fn update_post_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<UpdatePostRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let post_id = path.into_inner();
    let dto = req.into_inner();

    info!(post_id = %post_id, editor_id = %user.user_id, "Post edit");

    let command = match UpdatePostCommand::new(
        post_id,
        user.user_id,
        user.role,
        dto.title,
        dto.content,
    ) {
        Ok(c) => c,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.news.update_post.execute(command).await {
        Ok(post) => ApiResponse::success(post),

        Err(UpdatePostError::PostNotFound) => {
            ApiResponse::not_found("POST_NOT_FOUND", "News post not found")
        }

        Err(UpdatePostError::Forbidden) => {
            warn!(post_id = %post_id, editor_id = %user.user_id, "Edit by a non-author");
            ApiResponse::forbidden(
                "FORBIDDEN",
                "Only the author or an admin may modify this post",
            )
        }

        Err(UpdatePostError::RepositoryError(ref e)) => {
            error!(error = %e, "Post edit failed");
            ApiResponse::internal_error()
        }
    }
}
