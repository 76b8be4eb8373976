use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, EntityTrait, Set, Statement,
    TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::{ApprovalStatus, Role, RoleAssignment, User};
use crate::auth::application::ports::outgoing::{
    CreateUserData, DeletedAccount, UserRepository, UserRepositoryError,
};

use super::sea_orm_entity::{
    ActiveModel as UserActiveModel, Entity as UserEntity, Model as UserModel,
};

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_to_user(model: UserModel) -> Result<User, UserRepositoryError> {
        model.to_user().map_err(UserRepositoryError::DatabaseError)
    }

    fn map_insert_error(e: sea_orm::DbErr) -> UserRepositoryError {
        let err_str = e.to_string().to_lowercase();
        if err_str.contains("23505")
            || err_str.contains("duplicate key")
            || err_str.contains("unique constraint")
        {
            return UserRepositoryError::UserAlreadyExists;
        }
        if err_str.contains("23503") || err_str.contains("foreign key") {
            return UserRepositoryError::GroupNotFound;
        }
        UserRepositoryError::DatabaseError(e.to_string())
    }

    // The timetable RESTRICTs the teacher reference, so the row delete is
    // the step that can still fail after the content cascade.
    fn map_row_delete_error(e: sea_orm::DbErr) -> UserRepositoryError {
        let err_str = e.to_string().to_lowercase();
        if err_str.contains("fk_schedule_slots_teacher_id")
            || err_str.contains("23503")
            || err_str.contains("foreign key")
        {
            return UserRepositoryError::TeacherInSchedule;
        }
        UserRepositoryError::DatabaseError(e.to_string())
    }

    async fn find_model(&self, user_id: Uuid) -> Result<UserModel, UserRepositoryError> {
        UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(UserRepositoryError::UserNotFound)
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, data: CreateUserData) -> Result<User, UserRepositoryError> {
        let user_id = Uuid::new_v4();
        let (group_id, course) = match data.assignment {
            RoleAssignment::Student { group_id, course } => {
                (Some(group_id), Some(course.value()))
            }
            RoleAssignment::Teacher | RoleAssignment::Admin => (None, None),
        };

        let active_user = UserActiveModel {
            id: Set(user_id),
            username: Set(data.username),
            email: Set(data.email),
            password_hash: Set(data.password_hash),
            role: Set(data.assignment.role().as_str().to_string()),
            status: Set(ApprovalStatus::Pending.as_str().to_string()),
            group_id: Set(group_id),
            course: Set(course),
            photo_file: Set(None),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active_user
            .insert(&*self.db)
            .await
            .map_err(Self::map_insert_error)?;

        Self::map_to_user(inserted)
    }

    async fn update_status(
        &self,
        user_id: Uuid,
        status: ApprovalStatus,
    ) -> Result<User, UserRepositoryError> {
        let user = self.find_model(user_id).await?;

        let mut active_user: UserActiveModel = user.into();
        active_user.status = Set(status.as_str().to_string());

        let updated = active_user
            .update(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        Self::map_to_user(updated)
    }

    async fn update_photo(
        &self,
        user_id: Uuid,
        photo_file: Option<String>,
    ) -> Result<Option<String>, UserRepositoryError> {
        let user = self.find_model(user_id).await?;
        let previous = user.photo_file.clone();

        let mut active_user: UserActiveModel = user.into();
        active_user.photo_file = Set(photo_file);

        active_user
            .update(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        Ok(previous)
    }

    async fn delete_account(&self, user_id: Uuid) -> Result<DeletedAccount, UserRepositoryError> {
        let user = self.find_model(user_id).await?;
        let photo_file = user.photo_file.clone();
        let is_teacher = user.role == Role::Teacher.as_str();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        // Every cascade step is spelled out so the counts can be
        // reported and nothing relies on implicit FK rules.
        let likes_given = exec_count(
            &txn,
            "DELETE FROM news_likes WHERE user_id = $1",
            vec![user_id.into()],
        )
        .await?;

        let comments_written = exec_count(
            &txn,
            "DELETE FROM news_comments WHERE author_id = $1",
            vec![user_id.into()],
        )
        .await?;

        let likes_on_posts = exec_count(
            &txn,
            "DELETE FROM news_likes WHERE post_id IN (SELECT id FROM news_posts WHERE author_id = $1)",
            vec![user_id.into()],
        )
        .await?;

        let comments_on_posts = exec_count(
            &txn,
            "DELETE FROM news_comments WHERE post_id IN (SELECT id FROM news_posts WHERE author_id = $1)",
            vec![user_id.into()],
        )
        .await?;

        let posts_removed = exec_count(
            &txn,
            "DELETE FROM news_posts WHERE author_id = $1",
            vec![user_id.into()],
        )
        .await?;

        if is_teacher {
            exec_count(
                &txn,
                "DELETE FROM teacher_subjects WHERE teacher_id = $1",
                vec![user_id.into()],
            )
            .await?;
        }

        txn.execute(Statement::from_sql_and_values(
            sea_orm::DatabaseBackend::Postgres,
            "DELETE FROM users WHERE id = $1",
            [user_id.into()],
        ))
        .await
        .map_err(Self::map_row_delete_error)?;

        txn.commit()
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        Ok(DeletedAccount {
            photo_file,
            posts_removed,
            comments_removed: comments_written + comments_on_posts,
            likes_removed: likes_given + likes_on_posts,
        })
    }
}

async fn exec_count<C>(
    conn: &C,
    sql: &str,
    values: Vec<sea_orm::Value>,
) -> Result<u64, UserRepositoryError>
where
    C: ConnectionTrait,
{
    let result = conn
        .execute(Statement::from_sql_and_values(
            sea_orm::DatabaseBackend::Postgres,
            sql,
            values,
        ))
        .await
        .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

    Ok(result.rows_affected())
}
