use actix_web::{get, web, Responder};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::news::application::domain::entities::PostSummary;
use crate::news::application::ports::incoming::use_cases::GetNewsFeedError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct PostSummaryDto {
    pub id: Uuid,

    #[schema(example = "Exam week room changes")]
    pub title: String,

    pub content: String,
    pub author_id: Uuid,

    #[schema(example = "dean_office")]
    pub author_name: String,

    pub created_at: DateTime<Utc>,

    #[schema(example = 12)]
    pub like_count: u64,

    #[schema(example = 3)]
    pub comment_count: u64,

    /// Whether the requesting identity has liked this post.
    pub liked_by_caller: bool,
}

impl From<PostSummary> for PostSummaryDto {
    fn from(post: PostSummary) -> Self {
        Self {
            id: post.id,
            title: post.title,
            content: post.content,
            author_id: post.author_id,
            author_name: post.author_name,
            created_at: post.created_at,
            like_count: post.like_count,
            comment_count: post.comment_count,
            liked_by_caller: post.liked_by_caller,
        }
    }
}

/// News feed
///
/// All posts, newest first, each carrying its like and comment counts
/// and whether the caller has liked it.
#[utoipa::path(
    get,
    path = "/api/news",
    tag = "news",
    security(("BearerAuth" = [])),
    responses(
        (
            status = 200,
            description = "The feed, newest first",
            body = inline(SuccessResponse<Vec<PostSummaryDto>>),
            example = json!({
                "success": true,
                "data": [{
                    "id": "9f8e7d6c-5b4a-3928-1706-f5e4d3c2b1a0",
                    "title": "Exam week room changes",
                    "content": "All Friday exams move to building B.",
                    "author_id": "c1a9a1de-93f1-4a8f-8f6e-55b1d2f4e7aa",
                    "author_name": "dean_office",
                    "created_at": "2025-05-12T09:30:00Z",
                    "like_count": 12,
                    "comment_count": 3,
                    "liked_by_caller": false
                }]
            })
        ),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    )
)]
#[get("/api/news")]
pub async fn get_news_feed_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.news.feed.execute(user.user_id).await {
        Ok(posts) => {
            ApiResponse::success(posts.into_iter().map(PostSummaryDto::from).collect::<Vec<_>>())
        }

        Err(GetNewsFeedError::QueryFailed(ref e)) => {
            error!(error = %e, "Feed fetch failed");
            ApiResponse::internal_error()
        }
    }
}
