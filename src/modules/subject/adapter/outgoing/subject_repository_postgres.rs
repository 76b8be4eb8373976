use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseBackend, DatabaseConnection, EntityTrait,
    FromQueryResult, ModelTrait, Set, Statement, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::Role;
use crate::subject::application::domain::entities::Subject;
use crate::subject::application::ports::outgoing::{
    CreateSubjectData, SubjectRepository, SubjectRepositoryError, UpdateSubjectData,
};

use super::sea_orm_entity::subjects::{
    ActiveModel as SubjectActiveModel, Entity as SubjectEntity, Model as SubjectModel,
};
use super::sea_orm_entity::teacher_subjects::{
    ActiveModel as AssignmentActiveModel, Entity as AssignmentEntity,
};

#[derive(Clone, Debug)]
pub struct SubjectRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SubjectRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_write_error(e: sea_orm::DbErr) -> SubjectRepositoryError {
        let err_str = e.to_string().to_lowercase();
        if err_str.contains("23505")
            || err_str.contains("duplicate key")
            || err_str.contains("unique constraint")
        {
            return SubjectRepositoryError::SubjectAlreadyExists;
        }
        SubjectRepositoryError::DatabaseError(e.to_string())
    }
}

/// Every referenced id must exist and carry the teacher role before any
/// assignment row is written.
async fn check_teachers<C>(conn: &C, teacher_ids: &[Uuid]) -> Result<(), SubjectRepositoryError>
where
    C: ConnectionTrait,
{
    #[derive(FromQueryResult)]
    struct TeacherProbe {
        role: String,
    }

    for &teacher_id in teacher_ids {
        let probe = TeacherProbe::find_by_statement(Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"SELECT role FROM users WHERE id = $1"#,
            [teacher_id.into()],
        ))
        .one(conn)
        .await
        .map_err(|e| SubjectRepositoryError::DatabaseError(e.to_string()))?;

        match probe {
            None => return Err(SubjectRepositoryError::TeacherNotFound),
            Some(p) if p.role != Role::Teacher.as_str() => {
                return Err(SubjectRepositoryError::NotATeacher)
            }
            Some(_) => {}
        }
    }

    Ok(())
}

async fn insert_assignments<C>(
    conn: &C,
    subject_id: Uuid,
    teacher_ids: &[Uuid],
) -> Result<(), SubjectRepositoryError>
where
    C: ConnectionTrait,
{
    if teacher_ids.is_empty() {
        return Ok(());
    }

    let rows = teacher_ids.iter().map(|&teacher_id| AssignmentActiveModel {
        teacher_id: Set(teacher_id),
        subject_id: Set(subject_id),
        created_at: NotSet,
    });

    AssignmentEntity::insert_many(rows)
        .exec(conn)
        .await
        .map_err(|e| SubjectRepositoryError::DatabaseError(e.to_string()))?;

    Ok(())
}

#[async_trait]
impl SubjectRepository for SubjectRepositoryPostgres {
    async fn create_subject(
        &self,
        data: CreateSubjectData,
    ) -> Result<Subject, SubjectRepositoryError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SubjectRepositoryError::DatabaseError(e.to_string()))?;

        check_teachers(&txn, &data.teacher_ids).await?;

        let active_subject = SubjectActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            created_at: NotSet,
        };

        let inserted = active_subject
            .insert(&txn)
            .await
            .map_err(Self::map_write_error)?;

        insert_assignments(&txn, inserted.id, &data.teacher_ids).await?;

        txn.commit()
            .await
            .map_err(|e| SubjectRepositoryError::DatabaseError(e.to_string()))?;

        Ok(inserted.to_subject())
    }

    async fn update_subject(
        &self,
        data: UpdateSubjectData,
    ) -> Result<Subject, SubjectRepositoryError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SubjectRepositoryError::DatabaseError(e.to_string()))?;

        let subject = SubjectEntity::find_by_id(data.subject_id)
            .one(&txn)
            .await
            .map_err(|e| SubjectRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(SubjectRepositoryError::SubjectNotFound)?;

        check_teachers(&txn, &data.teacher_ids).await?;

        let mut active_subject: SubjectActiveModel = subject.into();
        active_subject.name = Set(data.name);

        let updated = active_subject
            .update(&txn)
            .await
            .map_err(Self::map_write_error)?;

        // Replace the assignment set wholesale.
        txn.execute(Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"DELETE FROM teacher_subjects WHERE subject_id = $1"#,
            [updated.id.into()],
        ))
        .await
        .map_err(|e| SubjectRepositoryError::DatabaseError(e.to_string()))?;

        insert_assignments(&txn, updated.id, &data.teacher_ids).await?;

        txn.commit()
            .await
            .map_err(|e| SubjectRepositoryError::DatabaseError(e.to_string()))?;

        Ok(updated.to_subject())
    }

    async fn delete_subject(&self, subject_id: Uuid) -> Result<(), SubjectRepositoryError> {
        let subject = SubjectEntity::find_by_id(subject_id)
            .one(&*self.db)
            .await
            .map_err(|e| SubjectRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(SubjectRepositoryError::SubjectNotFound)?;

        // Schedule slots reference subjects with RESTRICT; assignments
        // cascade away with the subject row.
        subject.delete(&*self.db).await.map_err(|e| {
            let err_str = e.to_string().to_lowercase();
            if err_str.contains("23503") || err_str.contains("foreign key") {
                SubjectRepositoryError::SubjectInUse
            } else {
                SubjectRepositoryError::DatabaseError(e.to_string())
            }
        })?;

        Ok(())
    }
}
