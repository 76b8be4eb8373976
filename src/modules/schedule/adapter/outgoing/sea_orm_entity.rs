use chrono::{DateTime, FixedOffset, NaiveTime};
use sea_orm::entity::prelude::*;

use crate::auth::application::domain::entities::Course;
use crate::schedule::application::domain::entities::{ScheduleSlot, Weekday};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "schedule_slots")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub group_id: Uuid,
    pub subject_id: Uuid,
    pub teacher_id: Uuid,
    pub course: i16,
    pub weekday: i16,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

impl Model {
    /// Rebuilds the domain slot from the row. Fails only on rows outside
    /// the course/weekday ranges, which the write paths never produce.
    pub fn to_slot(&self) -> Result<ScheduleSlot, String> {
        let course = Course::new(self.course).map_err(|e| format!("row {}: {e}", self.id))?;
        let weekday = Weekday::new(self.weekday).map_err(|e| format!("row {}: {e}", self.id))?;

        Ok(ScheduleSlot {
            id: self.id,
            group_id: self.group_id,
            subject_id: self.subject_id,
            teacher_id: self.teacher_id,
            course,
            weekday,
            start_time: self.start_time,
            end_time: self.end_time,
        })
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        #[cfg(feature = "no_db_triggers")]
        {
            use chrono::Utc;
            use sea_orm::ActiveValue::Set;

            if !_insert {
                self.updated_at = Set(Utc::now().into());
            }
        }

        Ok(self)
    }
}
