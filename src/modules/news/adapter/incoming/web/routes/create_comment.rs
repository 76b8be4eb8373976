use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::news::application::ports::incoming::use_cases::{
    CreateCommentCommand, CreateCommentError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateCommentRequestDto {
    pub content: String,
}

#[post("/api/news/{id}/comments")]
pub async fn create_comment_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<CreateCommentRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let post_id = path.into_inner();
    let dto = req.into_inner();

    info!(post_id = %post_id, author_id = %user.user_id, "Comment creation");

    let command = match CreateCommentCommand::new(post_id, user.user_id, dto.content) {
        Ok(c) => c,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.news.create_comment.execute(command).await {
        Ok(comment) => ApiResponse::created(comment),

        Err(CreateCommentError::PostNotFound) => {
            ApiResponse::not_found("POST_NOT_FOUND", "News post not found")
        }

        Err(CreateCommentError::RepositoryError(ref e)) => {
            error!(error = %e, "Comment creation failed");
            ApiResponse::internal_error()
        }
    }
}
