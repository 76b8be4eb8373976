use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::auth::application::domain::entities::{
    ApprovalStatus, Course, Role, RoleAssignment, User, UserId,
};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,

    #[sea_orm(unique)]
    pub username: String,

    #[sea_orm(unique)]
    pub email: String,

    pub password_hash: String,

    pub role: String,

    pub status: String,

    pub group_id: Option<Uuid>,

    pub course: Option<i16>,

    pub photo_file: Option<String>,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    /// Rebuilds the domain user from the row. Fails only on rows that
    /// violate the role/column contract, which the write paths never
    /// produce.
    pub fn to_user(&self) -> Result<User, String> {
        let role: Role = self.role.parse().map_err(|e| format!("row {}: {e}", self.id))?;
        let status: ApprovalStatus = self
            .status
            .parse()
            .map_err(|e| format!("row {}: {e}", self.id))?;

        let assignment = match role {
            Role::Student => {
                let group_id = self
                    .group_id
                    .ok_or_else(|| format!("student row {} has no group_id", self.id))?;
                let course = self
                    .course
                    .ok_or_else(|| format!("student row {} has no course", self.id))?;
                RoleAssignment::Student {
                    group_id,
                    course: Course::new(course).map_err(|e| e.to_string())?,
                }
            }
            Role::Teacher => RoleAssignment::Teacher,
            Role::Admin => RoleAssignment::Admin,
        };

        Ok(User {
            id: UserId::from(self.id),
            username: self.username.clone(),
            email: self.email.clone(),
            password_hash: self.password_hash.clone(),
            status,
            assignment,
            photo_file: self.photo_file.clone(),
            created_at: self.created_at.into(),
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
