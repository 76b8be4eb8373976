use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(NewsComments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(NewsComments::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(NewsComments::Content).text().not_null())
                    .col(ColumnDef::new(NewsComments::AuthorId).uuid().not_null())
                    .col(ColumnDef::new(NewsComments::PostId).uuid().not_null())
                    .col(
                        ColumnDef::new(NewsComments::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_news_comments_post_id")
                            .from(NewsComments::Table, NewsComments::PostId)
                            .to(NewsPosts::Table, NewsPosts::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_news_comments_author_id")
                            .from(NewsComments::Table, NewsComments::AuthorId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Detail view reads comments per post, oldest first
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_news_comments_post_id
                ON news_comments (post_id, created_at);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_news_comments_author_id
                ON news_comments (author_id);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_news_comments_post_id;
                DROP INDEX IF EXISTS idx_news_comments_author_id;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(NewsComments::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum NewsComments {
    Table,
    Id,
    Content,
    AuthorId,
    PostId,
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
