use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::Course;
use crate::schedule::application::domain::entities::SlotView;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetScheduleError {
    #[error("Failed to fetch schedule: {0}")]
    QueryFailed(String),
}

/// A group's week for one course, ordered by weekday then start time.
#[async_trait]
pub trait GetGroupScheduleUseCase: Send + Sync {
    async fn execute(&self, group_id: Uuid, course: Course)
        -> Result<Vec<SlotView>, GetScheduleError>;
}

/// A teacher's own week across all groups.
#[async_trait]
pub trait GetTeacherScheduleUseCase: Send + Sync {
    async fn execute(&self, teacher_id: Uuid) -> Result<Vec<SlotView>, GetScheduleError>;
}
