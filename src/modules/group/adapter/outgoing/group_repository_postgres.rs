use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::group::application::domain::entities::Group;
use crate::group::application::ports::outgoing::{
    CreateGroupData, GroupRepository, GroupRepositoryError, UpdateGroupData,
};

use super::sea_orm_entity::{
    ActiveModel as GroupActiveModel, Entity as GroupEntity, Model as GroupModel,
};

#[derive(Clone, Debug)]
pub struct GroupRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl GroupRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_to_group(model: GroupModel) -> Result<Group, GroupRepositoryError> {
        model
            .to_group()
            .map_err(GroupRepositoryError::DatabaseError)
    }

    fn map_write_error(e: sea_orm::DbErr) -> GroupRepositoryError {
        let err_str = e.to_string().to_lowercase();
        if err_str.contains("23505")
            || err_str.contains("duplicate key")
            || err_str.contains("unique constraint")
        {
            return GroupRepositoryError::GroupAlreadyExists;
        }
        GroupRepositoryError::DatabaseError(e.to_string())
    }

    async fn find_model(&self, group_id: Uuid) -> Result<GroupModel, GroupRepositoryError> {
        GroupEntity::find_by_id(group_id)
            .one(&*self.db)
            .await
            .map_err(|e| GroupRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(GroupRepositoryError::GroupNotFound)
    }
}

#[async_trait]
impl GroupRepository for GroupRepositoryPostgres {
    async fn create_group(&self, data: CreateGroupData) -> Result<Group, GroupRepositoryError> {
        let active_group = GroupActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            course: Set(data.course.value()),
            created_at: NotSet,
        };

        let inserted = active_group
            .insert(&*self.db)
            .await
            .map_err(Self::map_write_error)?;

        Self::map_to_group(inserted)
    }

    async fn update_group(&self, data: UpdateGroupData) -> Result<Group, GroupRepositoryError> {
        let group = self.find_model(data.group_id).await?;

        let mut active_group: GroupActiveModel = group.into();
        active_group.name = Set(data.name);
        active_group.course = Set(data.course.value());

        let updated = active_group
            .update(&*self.db)
            .await
            .map_err(Self::map_write_error)?;

        Self::map_to_group(updated)
    }

    async fn delete_group(&self, group_id: Uuid) -> Result<(), GroupRepositoryError> {
        let group = self.find_model(group_id).await?;

        // Users and schedule slots reference groups with RESTRICT, so a
        // populated group fails here instead of cascading.
        group.delete(&*self.db).await.map_err(|e| {
            let err_str = e.to_string().to_lowercase();
            if err_str.contains("23503") || err_str.contains("foreign key") {
                GroupRepositoryError::GroupInUse
            } else {
                GroupRepositoryError::DatabaseError(e.to_string())
            }
        })?;

        Ok(())
    }
}
