use async_trait::async_trait;

use crate::schedule::application::{
    domain::entities::ScheduleSlot,
    ports::incoming::use_cases::{UpdateSlotCommand, UpdateSlotError, UpdateSlotUseCase},
    ports::outgoing::{ScheduleRepository, ScheduleRepositoryError, UpdateSlotData},
};

#[derive(Debug, Clone)]
pub struct UpdateSlotService<R>
where
    R: ScheduleRepository + Send + Sync,
{
    repository: R,
}

impl<R> UpdateSlotService<R>
where
    R: ScheduleRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

fn map_repository_error(e: ScheduleRepositoryError) -> UpdateSlotError {
    match e {
        ScheduleRepositoryError::SlotNotFound => UpdateSlotError::SlotNotFound,
        ScheduleRepositoryError::GroupConflict => UpdateSlotError::GroupConflict,
        ScheduleRepositoryError::TeacherConflict => UpdateSlotError::TeacherConflict,
        ScheduleRepositoryError::DuplicateStartTime => UpdateSlotError::GroupConflict,
        ScheduleRepositoryError::GroupNotFound => UpdateSlotError::GroupNotFound,
        ScheduleRepositoryError::SubjectNotFound => UpdateSlotError::SubjectNotFound,
        ScheduleRepositoryError::TeacherNotFound => UpdateSlotError::TeacherNotFound,
        ScheduleRepositoryError::NotATeacher => UpdateSlotError::NotATeacher,
        other => UpdateSlotError::RepositoryError(other.to_string()),
    }
}

#[async_trait]
impl<R> UpdateSlotUseCase for UpdateSlotService<R>
where
    R: ScheduleRepository + Send + Sync,
{
    async fn execute(&self, command: UpdateSlotCommand) -> Result<ScheduleSlot, UpdateSlotError> {
        let data = UpdateSlotData {
            slot_id: command.slot_id(),
            group_id: command.group_id(),
            subject_id: command.subject_id(),
            teacher_id: command.teacher_id(),
            course: command.course(),
            weekday: command.weekday(),
            start_time: command.start_time(),
            end_time: command.end_time(),
        };

        self.repository
            .update_slot(data)
            .await
            .map_err(map_repository_error)
    }
}
