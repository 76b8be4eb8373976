use async_trait::async_trait;
use chrono::NaiveTime;
use uuid::Uuid;

use super::create_slot_use_case::SlotCommandError;
use crate::auth::application::domain::entities::Course;
use crate::schedule::application::domain::entities::{ScheduleSlot, Weekday};

//
// ──────────────────────────────────────────────────────────
// Update Slot Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct UpdateSlotCommand {
    slot_id: Uuid,
    group_id: Uuid,
    subject_id: Uuid,
    teacher_id: Uuid,
    course: Course,
    weekday: Weekday,
    start_time: NaiveTime,
    end_time: NaiveTime,
}

impl UpdateSlotCommand {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        slot_id: Uuid,
        group_id: Uuid,
        subject_id: Uuid,
        teacher_id: Uuid,
        course: i16,
        weekday: i16,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> Result<Self, SlotCommandError> {
        let course = Course::new(course).map_err(|_| SlotCommandError::InvalidCourse)?;
        let weekday = Weekday::new(weekday).map_err(|_| SlotCommandError::InvalidWeekday)?;

        if start_time >= end_time {
            return Err(SlotCommandError::InvalidTimeRange);
        }

        Ok(Self {
            slot_id,
            group_id,
            subject_id,
            teacher_id,
            course,
            weekday,
            start_time,
            end_time,
        })
    }

    pub fn slot_id(&self) -> Uuid {
        self.slot_id
    }

    pub fn group_id(&self) -> Uuid {
        self.group_id
    }

    pub fn subject_id(&self) -> Uuid {
        self.subject_id
    }

    pub fn teacher_id(&self) -> Uuid {
        self.teacher_id
    }

    pub fn course(&self) -> Course {
        self.course
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    pub fn start_time(&self) -> NaiveTime {
        self.start_time
    }

    pub fn end_time(&self) -> NaiveTime {
        self.end_time
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateSlotError {
    #[error("Schedule slot not found")]
    SlotNotFound,

    #[error("The group already has a class at that time")]
    GroupConflict,

    #[error("The teacher already has a class at that time")]
    TeacherConflict,

    #[error("Group not found")]
    GroupNotFound,

    #[error("Subject not found")]
    SubjectNotFound,

    #[error("Teacher not found")]
    TeacherNotFound,

    #[error("Referenced identity is not a teacher")]
    NotATeacher,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

/// Moving a slot re-runs the conflict scans with the slot's own id
/// excluded, so an unchanged time never self-conflicts.
#[async_trait]
pub trait UpdateSlotUseCase: Send + Sync {
    async fn execute(&self, command: UpdateSlotCommand) -> Result<ScheduleSlot, UpdateSlotError>;
}
