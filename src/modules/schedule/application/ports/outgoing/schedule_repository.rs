use async_trait::async_trait;
use chrono::NaiveTime;
use uuid::Uuid;

use crate::auth::application::domain::entities::Course;
use crate::schedule::application::domain::entities::{ScheduleSlot, Weekday};

#[derive(Debug, Clone)]
pub struct CreateSlotData {
    pub group_id: Uuid,
    pub subject_id: Uuid,
    pub teacher_id: Uuid,
    pub course: Course,
    pub weekday: Weekday,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

#[derive(Debug, Clone)]
pub struct UpdateSlotData {
    pub slot_id: Uuid,
    pub group_id: Uuid,
    pub subject_id: Uuid,
    pub teacher_id: Uuid,
    pub course: Course,
    pub weekday: Weekday,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ScheduleRepositoryError {
    #[error("The group already has a class at that time")]
    GroupConflict,

    #[error("The teacher already has a class at that time")]
    TeacherConflict,

    #[error("A slot with that exact start already exists for the group")]
    DuplicateStartTime,

    #[error("Schedule slot not found")]
    SlotNotFound,

    #[error("Group not found")]
    GroupNotFound,

    #[error("Subject not found")]
    SubjectNotFound,

    #[error("Teacher not found")]
    TeacherNotFound,

    #[error("Referenced identity is not a teacher")]
    NotATeacher,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Writes run check-then-insert inside one transaction: the overlap scans
/// and the insert either commit together or not at all. The unique index
/// on (group, course, weekday, start_time) stays as the final authority
/// when two writers race past each other's scans.
#[async_trait]
pub trait ScheduleRepository: Send + Sync {
    async fn create_slot(&self, data: CreateSlotData)
        -> Result<ScheduleSlot, ScheduleRepositoryError>;

    /// The slot's own row is excluded from the overlap scans, so saving
    /// an unchanged time is not a self-conflict.
    async fn update_slot(&self, data: UpdateSlotData)
        -> Result<ScheduleSlot, ScheduleRepositoryError>;

    async fn delete_slot(&self, slot_id: Uuid) -> Result<(), ScheduleRepositoryError>;
}
