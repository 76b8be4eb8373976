mod schedule_query;
mod schedule_repository;

pub use schedule_query::{ScheduleQuery, ScheduleQueryError};
pub use schedule_repository::{
    CreateSlotData, ScheduleRepository, ScheduleRepositoryError, UpdateSlotData,
};
