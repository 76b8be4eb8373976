use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::Course;
use crate::schedule::application::{
    domain::entities::SlotView,
    ports::incoming::use_cases::{
        GetGroupScheduleUseCase, GetScheduleError, GetTeacherScheduleUseCase,
    },
    ports::outgoing::ScheduleQuery,
};

/// Serves both timetable reads; they differ only in scope.
#[derive(Debug, Clone)]
pub struct GetScheduleService<Q>
where
    Q: ScheduleQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetScheduleService<Q>
where
    Q: ScheduleQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetGroupScheduleUseCase for GetScheduleService<Q>
where
    Q: ScheduleQuery + Send + Sync,
{
    async fn execute(
        &self,
        group_id: Uuid,
        course: Course,
    ) -> Result<Vec<SlotView>, GetScheduleError> {
        self.query
            .list_group_slots(group_id, course)
            .await
            .map_err(|e| GetScheduleError::QueryFailed(e.to_string()))
    }
}

#[async_trait]
impl<Q> GetTeacherScheduleUseCase for GetScheduleService<Q>
where
    Q: ScheduleQuery + Send + Sync,
{
    async fn execute(&self, teacher_id: Uuid) -> Result<Vec<SlotView>, GetScheduleError> {
        self.query
            .list_teacher_slots(teacher_id)
            .await
            .map_err(|e| GetScheduleError::QueryFailed(e.to_string()))
    }
}
