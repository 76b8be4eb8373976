use async_trait::async_trait;
use chrono::NaiveTime;
use uuid::Uuid;

use crate::auth::application::domain::entities::Course;
use crate::schedule::application::domain::entities::{ScheduleSlot, Weekday};

//
// ──────────────────────────────────────────────────────────
// Slot Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateSlotCommand {
    group_id: Uuid,
    subject_id: Uuid,
    teacher_id: Uuid,
    course: Course,
    weekday: Weekday,
    start_time: NaiveTime,
    end_time: NaiveTime,
}

#[derive(Debug, thiserror::Error)]
pub enum SlotCommandError {
    #[error("Course number must be between 1 and 4")]
    InvalidCourse,

    #[error("Weekday must be between 0 (Monday) and 6 (Sunday)")]
    InvalidWeekday,

    #[error("Start time must be before end time")]
    InvalidTimeRange,
}

impl CreateSlotCommand {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
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
            group_id,
            subject_id,
            teacher_id,
            course,
            weekday,
            start_time,
            end_time,
        })
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
pub enum CreateSlotError {
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

#[async_trait]
pub trait CreateSlotUseCase: Send + Sync {
    async fn execute(&self, command: CreateSlotCommand) -> Result<ScheduleSlot, CreateSlotError>;
}
