use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::application::domain::entities::Course;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Weekday(i16);

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Weekday must be between 0 (Monday) and 6 (Sunday)")]
pub struct InvalidWeekday;

impl Weekday {
    pub fn new(value: i16) -> Result<Self, InvalidWeekday> {
        if (0..=6).contains(&value) {
            Ok(Self(value))
        } else {
            Err(InvalidWeekday)
        }
    }

    pub fn value(&self) -> i16 {
        self.0
    }
}

/// One scheduled class occurrence, as stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleSlot {
    pub id: Uuid,
    pub group_id: Uuid,
    pub subject_id: Uuid,
    pub teacher_id: Uuid,
    pub course: Course,
    pub weekday: Weekday,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

/// A slot joined with the names a timetable displays.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotView {
    pub id: Uuid,
    pub group_id: Uuid,
    pub group_name: String,
    pub subject_id: Uuid,
    pub subject_name: String,
    pub teacher_id: Uuid,
    pub teacher_name: String,
    pub course: Course,
    pub weekday: Weekday,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekday_accepts_zero_through_six() {
        for value in 0..=6 {
            assert!(Weekday::new(value).is_ok());
        }
    }

    #[test]
    fn weekday_rejects_out_of_range_values() {
        assert_eq!(Weekday::new(-1), Err(InvalidWeekday));
        assert_eq!(Weekday::new(7), Err(InvalidWeekday));
    }
}
