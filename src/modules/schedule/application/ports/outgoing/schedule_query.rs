use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::Course;
use crate::schedule::application::domain::entities::SlotView;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ScheduleQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Timetable reads, ordered by weekday then start time.
#[async_trait]
pub trait ScheduleQuery: Send + Sync {
    async fn list_group_slots(
        &self,
        group_id: Uuid,
        course: Course,
    ) -> Result<Vec<SlotView>, ScheduleQueryError>;

    async fn list_teacher_slots(
        &self,
        teacher_id: Uuid,
    ) -> Result<Vec<SlotView>, ScheduleQueryError>;
}
