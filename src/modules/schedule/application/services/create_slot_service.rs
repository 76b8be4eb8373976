use async_trait::async_trait;
use tracing::info;

use crate::schedule::application::{
    domain::entities::ScheduleSlot,
    ports::incoming::use_cases::{CreateSlotCommand, CreateSlotError, CreateSlotUseCase},
    ports::outgoing::{CreateSlotData, ScheduleRepository, ScheduleRepositoryError},
};

#[derive(Debug, Clone)]
pub struct CreateSlotService<R>
where
    R: ScheduleRepository + Send + Sync,
{
    repository: R,
}

impl<R> CreateSlotService<R>
where
    R: ScheduleRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

fn map_repository_error(e: ScheduleRepositoryError) -> CreateSlotError {
    match e {
        ScheduleRepositoryError::GroupConflict => CreateSlotError::GroupConflict,
        ScheduleRepositoryError::TeacherConflict => CreateSlotError::TeacherConflict,
        // The unique start guard only fires when the overlap scan lost a
        // race; to the caller it is the same group conflict.
        ScheduleRepositoryError::DuplicateStartTime => CreateSlotError::GroupConflict,
        ScheduleRepositoryError::GroupNotFound => CreateSlotError::GroupNotFound,
        ScheduleRepositoryError::SubjectNotFound => CreateSlotError::SubjectNotFound,
        ScheduleRepositoryError::TeacherNotFound => CreateSlotError::TeacherNotFound,
        ScheduleRepositoryError::NotATeacher => CreateSlotError::NotATeacher,
        other => CreateSlotError::RepositoryError(other.to_string()),
    }
}

#[async_trait]
impl<R> CreateSlotUseCase for CreateSlotService<R>
where
    R: ScheduleRepository + Send + Sync,
{
    async fn execute(&self, command: CreateSlotCommand) -> Result<ScheduleSlot, CreateSlotError> {
        let data = CreateSlotData {
            group_id: command.group_id(),
            subject_id: command.subject_id(),
            teacher_id: command.teacher_id(),
            course: command.course(),
            weekday: command.weekday(),
            start_time: command.start_time(),
            end_time: command.end_time(),
        };

        let slot = self
            .repository
            .create_slot(data)
            .await
            .map_err(map_repository_error)?;

        info!(
            "Slot booked: group {} weekday {} {}-{}",
            slot.group_id,
            slot.weekday.value(),
            slot.start_time,
            slot.end_time
        );

        Ok(slot)
    }
}
