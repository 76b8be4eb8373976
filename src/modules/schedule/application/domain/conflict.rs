//! Double-booking checks for schedule slots.
//!
//! Pure functions over already-fetched slots; the repository runs them
//! inside the same transaction that inserts, so the decision and the
//! write cannot be split by a concurrent booking.

use chrono::NaiveTime;
use uuid::Uuid;

use crate::auth::application::domain::entities::Course;
use crate::schedule::application::domain::entities::{ScheduleSlot, Weekday};

/// A slot that is about to be inserted or moved.
#[derive(Debug, Clone, Copy)]
pub struct CandidateSlot {
    pub group_id: Uuid,
    pub teacher_id: Uuid,
    pub course: Course,
    pub weekday: Weekday,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SlotConflict {
    #[error("Start time must be before end time")]
    InvalidTimeRange,

    #[error("The group already has a class at that time")]
    GroupConflict,

    #[error("The teacher already has a class at that time")]
    TeacherConflict,
}

/// Half-open overlap: a class ending exactly when another starts does
/// not collide.
fn overlaps(a_start: NaiveTime, a_end: NaiveTime, b_start: NaiveTime, b_end: NaiveTime) -> bool {
    a_start < b_end && a_end > b_start
}

/// Decides whether a candidate may be committed. Scans `existing` twice:
/// once for the group scope (same group, course, weekday) and once for
/// the teacher scope (same teacher, weekday). When editing, `exclude` is
/// the slot's own id so an unchanged time is not flagged against itself.
pub fn check_slot(
    candidate: &CandidateSlot,
    existing: &[ScheduleSlot],
    exclude: Option<Uuid>,
) -> Result<(), SlotConflict> {
    if candidate.start_time >= candidate.end_time {
        return Err(SlotConflict::InvalidTimeRange);
    }

    let others = existing.iter().filter(|slot| Some(slot.id) != exclude);

    for slot in others {
        if slot.weekday != candidate.weekday {
            continue;
        }

        let in_group_scope = slot.group_id == candidate.group_id && slot.course == candidate.course;
        let in_teacher_scope = slot.teacher_id == candidate.teacher_id;

        if !in_group_scope && !in_teacher_scope {
            continue;
        }

        if overlaps(
            slot.start_time,
            slot.end_time,
            candidate.start_time,
            candidate.end_time,
        ) {
            return Err(if in_group_scope {
                SlotConflict::GroupConflict
            } else {
                SlotConflict::TeacherConflict
            });
        }
    }

    Ok(())
}
