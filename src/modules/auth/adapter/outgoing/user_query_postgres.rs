use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::{ApprovalStatus, Role, User};
use crate::auth::application::ports::outgoing::{UserQuery, UserQueryError};

use super::sea_orm_entity::{Column as UserColumn, Entity as UserEntity, Model as UserModel};

#[derive(Clone, Debug)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_to_user(model: UserModel) -> Result<User, UserQueryError> {
        model.to_user().map_err(UserQueryError::DatabaseError)
    }

    fn map_to_users(models: Vec<UserModel>) -> Result<Vec<User>, UserQueryError> {
        models.into_iter().map(Self::map_to_user).collect()
    }
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserQueryError> {
        let user = UserEntity::find()
            .filter(UserColumn::Username.eq(username))
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        user.map(Self::map_to_user).transpose()
    }

    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, UserQueryError> {
        let user = UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        user.map(Self::map_to_user).transpose()
    }

    async fn list_pending(&self) -> Result<Vec<User>, UserQueryError> {
        let users = UserEntity::find()
            .filter(UserColumn::Status.eq(ApprovalStatus::Pending.as_str()))
            .order_by_asc(UserColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        Self::map_to_users(users)
    }

    async fn list_teachers(&self) -> Result<Vec<User>, UserQueryError> {
        let users = UserEntity::find()
            .filter(UserColumn::Role.eq(Role::Teacher.as_str()))
            .filter(UserColumn::Status.eq(ApprovalStatus::Approved.as_str()))
            .order_by_asc(UserColumn::Username)
            .all(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        Self::map_to_users(users)
    }
}
