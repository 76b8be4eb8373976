use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::auth::application::domain::entities::User;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PortalCounts {
    pub users: u64,
    pub groups: u64,
    pub subjects: u64,
    pub news_posts: u64,
}

/// Headline row for the dashboard's recent-activity panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecentPost {
    pub id: Uuid,
    pub title: String,
    pub author_name: String,
    pub created_at: DateTime<Utc>,
}

/// Everything the admin landing page shows in one payload.
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub counts: PortalCounts,
    pub pending_registrations: Vec<User>,
    pub latest_posts: Vec<RecentPost>,
}
