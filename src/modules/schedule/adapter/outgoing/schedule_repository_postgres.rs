use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseBackend, DatabaseConnection,
    EntityTrait, FromQueryResult, ModelTrait, QueryFilter, Set, Statement, TransactionTrait,
};
use std::collections::HashSet;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::{Course, Role};
use crate::schedule::application::domain::conflict::{check_slot, CandidateSlot, SlotConflict};
use crate::schedule::application::domain::entities::{ScheduleSlot, Weekday};
use crate::schedule::application::ports::outgoing::{
    CreateSlotData, ScheduleRepository, ScheduleRepositoryError, UpdateSlotData,
};

use super::sea_orm_entity::{
    ActiveModel as SlotActiveModel, Column as SlotColumn, Entity as SlotEntity, Model as SlotModel,
};

#[derive(Clone, Debug)]
pub struct ScheduleRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ScheduleRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_write_error(e: sea_orm::DbErr) -> ScheduleRepositoryError {
        let err_str = e.to_string().to_lowercase();
        if err_str.contains("uq_schedule_time")
            || err_str.contains("23505")
            || err_str.contains("duplicate key")
            || err_str.contains("unique constraint")
        {
            return ScheduleRepositoryError::DuplicateStartTime;
        }
        // A reference can vanish between the probes and the insert.
        if err_str.contains("fk_schedule_slots_group_id") {
            return ScheduleRepositoryError::GroupNotFound;
        }
        if err_str.contains("fk_schedule_slots_subject_id") {
            return ScheduleRepositoryError::SubjectNotFound;
        }
        if err_str.contains("fk_schedule_slots_teacher_id") {
            return ScheduleRepositoryError::TeacherNotFound;
        }
        ScheduleRepositoryError::DatabaseError(e.to_string())
    }

    fn map_conflict(conflict: SlotConflict) -> ScheduleRepositoryError {
        match conflict {
            SlotConflict::GroupConflict => ScheduleRepositoryError::GroupConflict,
            SlotConflict::TeacherConflict => ScheduleRepositoryError::TeacherConflict,
            // Commands validate the range before it gets here.
            SlotConflict::InvalidTimeRange => {
                ScheduleRepositoryError::DatabaseError(conflict.to_string())
            }
        }
    }
}

async fn check_references<C>(
    conn: &C,
    group_id: Uuid,
    subject_id: Uuid,
    teacher_id: Uuid,
) -> Result<(), ScheduleRepositoryError>
where
    C: ConnectionTrait,
{
    #[derive(FromQueryResult)]
    struct IdProbe {
        #[allow(dead_code)]
        id: Uuid,
    }

    #[derive(FromQueryResult)]
    struct RoleProbe {
        role: String,
    }

    let group = IdProbe::find_by_statement(Statement::from_sql_and_values(
        DatabaseBackend::Postgres,
        r#"SELECT id FROM groups WHERE id = $1"#,
        [group_id.into()],
    ))
    .one(conn)
    .await
    .map_err(|e| ScheduleRepositoryError::DatabaseError(e.to_string()))?;

    if group.is_none() {
        return Err(ScheduleRepositoryError::GroupNotFound);
    }

    let subject = IdProbe::find_by_statement(Statement::from_sql_and_values(
        DatabaseBackend::Postgres,
        r#"SELECT id FROM subjects WHERE id = $1"#,
        [subject_id.into()],
    ))
    .one(conn)
    .await
    .map_err(|e| ScheduleRepositoryError::DatabaseError(e.to_string()))?;

    if subject.is_none() {
        return Err(ScheduleRepositoryError::SubjectNotFound);
    }

    let teacher = RoleProbe::find_by_statement(Statement::from_sql_and_values(
        DatabaseBackend::Postgres,
        r#"SELECT role FROM users WHERE id = $1"#,
        [teacher_id.into()],
    ))
    .one(conn)
    .await
    .map_err(|e| ScheduleRepositoryError::DatabaseError(e.to_string()))?;

    match teacher {
        None => Err(ScheduleRepositoryError::TeacherNotFound),
        Some(p) if p.role != Role::Teacher.as_str() => Err(ScheduleRepositoryError::NotATeacher),
        Some(_) => Ok(()),
    }
}

/// Both overlap scopes for a candidate, deduplicated: group scope is
/// (group, course, weekday), teacher scope is (teacher, weekday).
async fn fetch_scope_slots<C>(
    conn: &C,
    group_id: Uuid,
    course: Course,
    weekday: Weekday,
    teacher_id: Uuid,
) -> Result<Vec<ScheduleSlot>, ScheduleRepositoryError>
where
    C: ConnectionTrait,
{
    let group_rows = SlotEntity::find()
        .filter(SlotColumn::GroupId.eq(group_id))
        .filter(SlotColumn::Course.eq(course.value()))
        .filter(SlotColumn::Weekday.eq(weekday.value()))
        .all(conn)
        .await
        .map_err(|e| ScheduleRepositoryError::DatabaseError(e.to_string()))?;

    let teacher_rows = SlotEntity::find()
        .filter(SlotColumn::TeacherId.eq(teacher_id))
        .filter(SlotColumn::Weekday.eq(weekday.value()))
        .all(conn)
        .await
        .map_err(|e| ScheduleRepositoryError::DatabaseError(e.to_string()))?;

    let mut seen = HashSet::new();
    let mut slots = Vec::new();
    for model in group_rows.into_iter().chain(teacher_rows) {
        if seen.insert(model.id) {
            slots.push(
                model
                    .to_slot()
                    .map_err(ScheduleRepositoryError::DatabaseError)?,
            );
        }
    }

    Ok(slots)
}

#[async_trait]
impl ScheduleRepository for ScheduleRepositoryPostgres {
    async fn create_slot(
        &self,
        data: CreateSlotData,
    ) -> Result<ScheduleSlot, ScheduleRepositoryError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| ScheduleRepositoryError::DatabaseError(e.to_string()))?;

        check_references(&txn, data.group_id, data.subject_id, data.teacher_id).await?;

        let existing =
            fetch_scope_slots(&txn, data.group_id, data.course, data.weekday, data.teacher_id)
                .await?;

        let candidate = CandidateSlot {
            group_id: data.group_id,
            teacher_id: data.teacher_id,
            course: data.course,
            weekday: data.weekday,
            start_time: data.start_time,
            end_time: data.end_time,
        };

        check_slot(&candidate, &existing, None).map_err(Self::map_conflict)?;

        let active_slot = SlotActiveModel {
            id: Set(Uuid::new_v4()),
            group_id: Set(data.group_id),
            subject_id: Set(data.subject_id),
            teacher_id: Set(data.teacher_id),
            course: Set(data.course.value()),
            weekday: Set(data.weekday.value()),
            start_time: Set(data.start_time),
            end_time: Set(data.end_time),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active_slot
            .insert(&txn)
            .await
            .map_err(Self::map_write_error)?;

        txn.commit()
            .await
            .map_err(|e| ScheduleRepositoryError::DatabaseError(e.to_string()))?;

        inserted
            .to_slot()
            .map_err(ScheduleRepositoryError::DatabaseError)
    }

    async fn update_slot(
        &self,
        data: UpdateSlotData,
    ) -> Result<ScheduleSlot, ScheduleRepositoryError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| ScheduleRepositoryError::DatabaseError(e.to_string()))?;

        let slot = SlotEntity::find_by_id(data.slot_id)
            .one(&txn)
            .await
            .map_err(|e| ScheduleRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(ScheduleRepositoryError::SlotNotFound)?;

        check_references(&txn, data.group_id, data.subject_id, data.teacher_id).await?;

        let existing =
            fetch_scope_slots(&txn, data.group_id, data.course, data.weekday, data.teacher_id)
                .await?;

        let candidate = CandidateSlot {
            group_id: data.group_id,
            teacher_id: data.teacher_id,
            course: data.course,
            weekday: data.weekday,
            start_time: data.start_time,
            end_time: data.end_time,
        };

        check_slot(&candidate, &existing, Some(data.slot_id)).map_err(Self::map_conflict)?;

        let mut active_slot: SlotActiveModel = slot.into();
        active_slot.group_id = Set(data.group_id);
        active_slot.subject_id = Set(data.subject_id);
        active_slot.teacher_id = Set(data.teacher_id);
        active_slot.course = Set(data.course.value());
        active_slot.weekday = Set(data.weekday.value());
        active_slot.start_time = Set(data.start_time);
        active_slot.end_time = Set(data.end_time);

        let updated = active_slot
            .update(&txn)
            .await
            .map_err(Self::map_write_error)?;

        txn.commit()
            .await
            .map_err(|e| ScheduleRepositoryError::DatabaseError(e.to_string()))?;

        updated
            .to_slot()
            .map_err(ScheduleRepositoryError::DatabaseError)
    }

    async fn delete_slot(&self, slot_id: Uuid) -> Result<(), ScheduleRepositoryError> {
        let slot = SlotEntity::find_by_id(slot_id)
            .one(&*self.db)
            .await
            .map_err(|e| ScheduleRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(ScheduleRepositoryError::SlotNotFound)?;

        slot.delete(&*self.db)
            .await
            .map_err(|e| ScheduleRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
