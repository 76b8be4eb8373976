use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A news post as stored. `updated_at` moves when the author or an
/// admin edits the post.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewsPost {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comment {
    pub id: Uuid,
    pub post_id: Uuid,
    pub author_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Feed row: the post plus the aggregates the list page renders.
/// `liked_by_caller` is resolved against the requesting identity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostSummary {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author_id: Uuid,
    pub author_name: String,
    pub created_at: DateTime<Utc>,
    pub like_count: u64,
    pub comment_count: u64,
    pub liked_by_caller: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommentView {
    pub id: Uuid,
    pub author_id: Uuid,
    pub author_name: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Detail page payload: the summary row plus its comments, oldest
/// first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostDetail {
    pub post: PostSummary,
    pub comments: Vec<CommentView>,
}

/// Trimmed row for an author's own posts on the profile page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthorPost {
    pub id: Uuid,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub like_count: u64,
    pub comment_count: u64,
}

/// Resulting state after a like toggle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LikeStatus {
    pub liked: bool,
    pub like_count: u64,
}
