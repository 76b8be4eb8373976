use async_trait::async_trait;
use chrono::NaiveTime;
use sea_orm::{DatabaseBackend, DatabaseConnection, FromQueryResult, Statement};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::Course;
use crate::schedule::application::domain::entities::{SlotView, Weekday};
use crate::schedule::application::ports::outgoing::{ScheduleQuery, ScheduleQueryError};

/// One timetable row with the display names already joined in.
#[derive(Debug, FromQueryResult)]
struct SlotViewRow {
    id: Uuid,
    group_id: Uuid,
    group_name: String,
    subject_id: Uuid,
    subject_name: String,
    teacher_id: Uuid,
    teacher_name: String,
    course: i16,
    weekday: i16,
    start_time: NaiveTime,
    end_time: NaiveTime,
}

impl SlotViewRow {
    fn to_view(&self) -> Result<SlotView, ScheduleQueryError> {
        let course = Course::new(self.course)
            .map_err(|e| ScheduleQueryError::DatabaseError(format!("slot {}: {e}", self.id)))?;
        let weekday = Weekday::new(self.weekday)
            .map_err(|e| ScheduleQueryError::DatabaseError(format!("slot {}: {e}", self.id)))?;

        Ok(SlotView {
            id: self.id,
            group_id: self.group_id,
            group_name: self.group_name.clone(),
            subject_id: self.subject_id,
            subject_name: self.subject_name.clone(),
            teacher_id: self.teacher_id,
            teacher_name: self.teacher_name.clone(),
            course,
            weekday,
            start_time: self.start_time,
            end_time: self.end_time,
        })
    }
}

const SLOT_VIEW_SELECT: &str = r#"
SELECT s.id,
       s.group_id,
       g.name AS group_name,
       s.subject_id,
       sub.name AS subject_name,
       s.teacher_id,
       u.username AS teacher_name,
       s.course,
       s.weekday,
       s.start_time,
       s.end_time
FROM schedule_slots s
JOIN groups g ON g.id = s.group_id
JOIN subjects sub ON sub.id = s.subject_id
JOIN users u ON u.id = s.teacher_id
"#;

#[derive(Clone, Debug)]
pub struct ScheduleQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ScheduleQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn fetch_views(&self, statement: Statement) -> Result<Vec<SlotView>, ScheduleQueryError> {
        let rows = SlotViewRow::find_by_statement(statement)
            .all(&*self.db)
            .await
            .map_err(|e| ScheduleQueryError::DatabaseError(e.to_string()))?;

        rows.iter().map(SlotViewRow::to_view).collect()
    }
}

#[async_trait]
impl ScheduleQuery for ScheduleQueryPostgres {
    async fn list_group_slots(
        &self,
        group_id: Uuid,
        course: Course,
    ) -> Result<Vec<SlotView>, ScheduleQueryError> {
        let sql = format!(
            "{SLOT_VIEW_SELECT} WHERE s.group_id = $1 AND s.course = $2 ORDER BY s.weekday, s.start_time"
        );

        self.fetch_views(Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            sql,
            [group_id.into(), course.value().into()],
        ))
        .await
    }

    async fn list_teacher_slots(
        &self,
        teacher_id: Uuid,
    ) -> Result<Vec<SlotView>, ScheduleQueryError> {
        let sql = format!("{SLOT_VIEW_SELECT} WHERE s.teacher_id = $1 ORDER BY s.weekday, s.start_time");

        self.fetch_views(Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            sql,
            [teacher_id.into()],
        ))
        .await
    }
}
