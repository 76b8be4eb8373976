use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ScheduleSlots::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ScheduleSlots::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ScheduleSlots::GroupId).uuid().not_null())
                    .col(ColumnDef::new(ScheduleSlots::SubjectId).uuid().not_null())
                    .col(ColumnDef::new(ScheduleSlots::TeacherId).uuid().not_null())
                    .col(
                        ColumnDef::new(ScheduleSlots::Course)
                            .small_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ScheduleSlots::Weekday)
                            .small_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ScheduleSlots::StartTime).time().not_null())
                    .col(ColumnDef::new(ScheduleSlots::EndTime).time().not_null())
                    .col(
                        ColumnDef::new(ScheduleSlots::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(ScheduleSlots::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    // Reference data must be detached from slots before removal
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_schedule_slots_group_id")
                            .from(ScheduleSlots::Table, ScheduleSlots::GroupId)
                            .to(Groups::Table, Groups::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_schedule_slots_subject_id")
                            .from(ScheduleSlots::Table, ScheduleSlots::SubjectId)
                            .to(Subjects::Table, Subjects::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_schedule_slots_teacher_id")
                            .from(ScheduleSlots::Table, ScheduleSlots::TeacherId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Duplicate guard independent of the overlap validation
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX uq_schedule_time
                ON schedule_slots (group_id, course, weekday, start_time);
                "#,
            )
            .await?;

        // Overlap scans hit these two shapes
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_schedule_slots_group_scope
                ON schedule_slots (group_id, course, weekday);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_schedule_slots_teacher_scope
                ON schedule_slots (teacher_id, weekday);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_schedule_slots_updated_at
                BEFORE UPDATE ON schedule_slots
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                "DROP TRIGGER IF EXISTS update_schedule_slots_updated_at ON schedule_slots",
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS uq_schedule_time;
                DROP INDEX IF EXISTS idx_schedule_slots_group_scope;
                DROP INDEX IF EXISTS idx_schedule_slots_teacher_scope;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ScheduleSlots::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ScheduleSlots {
    Table,
    Id,
    GroupId,
    SubjectId,
    TeacherId,
    Course,
    Weekday,
    StartTime,
    EndTime,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Groups {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Subjects {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
