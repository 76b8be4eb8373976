use chrono::{DateTime, FixedOffset};
use sea_orm::entity::prelude::*;

use crate::auth::application::domain::entities::Course;
use crate::group::application::domain::entities::Group;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "groups")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub course: i16,
    pub created_at: DateTime<FixedOffset>,
}

impl Model {
    /// Rebuilds the domain group from the row. Fails only on a course
    /// outside the 1..=4 range, which the write paths never produce.
    pub fn to_group(&self) -> Result<Group, String> {
        let course = Course::new(self.course).map_err(|e| format!("row {}: {e}", self.id))?;

        Ok(Group {
            id: self.id,
            name: self.name.clone(),
            course,
        })
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
