use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info};

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::news::application::ports::incoming::use_cases::{CreatePostCommand, CreatePostError};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreatePostRequestDto {
    pub title: String,
    pub content: String,
}

#[post("/api/news")]
pub async fn create_post_handler(
    user: AuthenticatedUser,
    req: web::Json<CreatePostRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    info!(author_id = %user.user_id, "Post creation");

    let command = match CreatePostCommand::new(user.user_id, dto.title, dto.content) {
        Ok(c) => c,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.news.create_post.execute(command).await {
        Ok(post) => ApiResponse::created(post),

        Err(CreatePostError::RepositoryError(ref e)) => {
            error!(error = %e, "Post creation failed");
            ApiResponse::internal_error()
        }
    }
}
