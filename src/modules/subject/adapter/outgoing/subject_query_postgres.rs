use async_trait::async_trait;
use sea_orm::{
    DatabaseBackend, DatabaseConnection, EntityTrait, FromQueryResult, QueryOrder, Statement,
};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::subject::application::domain::entities::{SubjectTeacher, SubjectWithTeachers};
use crate::subject::application::ports::outgoing::{SubjectQuery, SubjectQueryError};

use super::sea_orm_entity::subjects::{Column as SubjectColumn, Entity as SubjectEntity};

#[derive(Clone, Debug)]
pub struct SubjectQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SubjectQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[derive(FromQueryResult)]
struct AssignmentRow {
    subject_id: Uuid,
    teacher_id: Uuid,
    username: String,
}

#[async_trait]
impl SubjectQuery for SubjectQueryPostgres {
    async fn list_subjects(&self) -> Result<Vec<SubjectWithTeachers>, SubjectQueryError> {
        let subjects = SubjectEntity::find()
            .order_by_asc(SubjectColumn::Name)
            .all(&*self.db)
            .await
            .map_err(|e| SubjectQueryError::DatabaseError(e.to_string()))?;

        let assignments = AssignmentRow::find_by_statement(Statement::from_string(
            DatabaseBackend::Postgres,
            r#"
            SELECT ts.subject_id, u.id AS teacher_id, u.username
            FROM teacher_subjects ts
            JOIN users u ON u.id = ts.teacher_id
            ORDER BY u.username
            "#,
        ))
        .all(&*self.db)
        .await
        .map_err(|e| SubjectQueryError::DatabaseError(e.to_string()))?;

        let mut teachers_by_subject: HashMap<Uuid, Vec<SubjectTeacher>> = HashMap::new();
        for row in assignments {
            teachers_by_subject
                .entry(row.subject_id)
                .or_default()
                .push(SubjectTeacher {
                    id: row.teacher_id,
                    username: row.username,
                });
        }

        Ok(subjects
            .into_iter()
            .map(|subject| SubjectWithTeachers {
                teachers: teachers_by_subject.remove(&subject.id).unwrap_or_default(),
                id: subject.id,
                name: subject.name,
            })
            .collect())
    }
}
