use async_trait::async_trait;
use chrono::{DateTime, NaiveTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::auth::application::domain::entities::User;

//
// ──────────────────────────────────────────────────────────
// Result
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Serialize)]
pub struct ProfilePost {
    pub id: Uuid,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub like_count: u64,
    pub comment_count: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileSlot {
    pub id: Uuid,
    pub weekday: i16,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub subject_name: String,
    pub group_name: String,
    pub teacher_name: String,
}

/// The signed-in user's own page: identity fields, their posts newest
/// first, and the week of classes relevant to them (a student's group, a
/// teacher's own slots, nothing for an admin).
#[derive(Debug, Clone, Serialize)]
pub struct UserProfile {
    #[serde(flatten)]
    pub user: User,
    pub posts: Vec<ProfilePost>,
    pub schedule: Vec<ProfileSlot>,
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchProfileError {
    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait FetchProfileUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid) -> Result<UserProfile, FetchProfileError>;
}
