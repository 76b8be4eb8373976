use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(NewsLikes::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(NewsLikes::PostId).uuid().not_null())
                    .col(ColumnDef::new(NewsLikes::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(NewsLikes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    // Composite key doubles as the no-duplicate-likes guard
                    .primary_key(
                        Index::create()
                            .col(NewsLikes::PostId)
                            .col(NewsLikes::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_news_likes_post_id")
                            .from(NewsLikes::Table, NewsLikes::PostId)
                            .to(NewsPosts::Table, NewsPosts::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_news_likes_user_id")
                            .from(NewsLikes::Table, NewsLikes::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Like counts aggregate per post
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_news_likes_post_id
                ON news_likes (post_id);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_news_likes_post_id;")
            .await?;

        manager
            .drop_table(Table::drop().table(NewsLikes::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum NewsLikes {
    Table,
    PostId,
    UserId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum NewsPosts {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
