use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use crate::group::application::domain::entities::Group;
use crate::group::application::ports::outgoing::{GroupQuery, GroupQueryError};

use super::sea_orm_entity::{Column as GroupColumn, Entity as GroupEntity};

#[derive(Clone, Debug)]
pub struct GroupQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl GroupQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl GroupQuery for GroupQueryPostgres {
    async fn list_groups(&self) -> Result<Vec<Group>, GroupQueryError> {
        let groups = GroupEntity::find()
            .order_by_asc(GroupColumn::Course)
            .order_by_asc(GroupColumn::Name)
            .all(&*self.db)
            .await
            .map_err(|e| GroupQueryError::DatabaseError(e.to_string()))?;

        groups
            .into_iter()
            .map(|m| m.to_group().map_err(GroupQueryError::DatabaseError))
            .collect()
    }

    async fn find_by_id(&self, group_id: Uuid) -> Result<Option<Group>, GroupQueryError> {
        let group = GroupEntity::find_by_id(group_id)
            .one(&*self.db)
            .await
            .map_err(|e| GroupQueryError::DatabaseError(e.to_string()))?;

        group
            .map(|m| m.to_group().map_err(GroupQueryError::DatabaseError))
            .transpose()
    }
}
