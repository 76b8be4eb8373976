use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(NewsPosts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(NewsPosts::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(NewsPosts::Title).string_len(200).not_null())
                    .col(ColumnDef::new(NewsPosts::Content).text().not_null())
                    .col(ColumnDef::new(NewsPosts::AuthorId).uuid().not_null())
                    .col(
                        ColumnDef::new(NewsPosts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(NewsPosts::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    // Account deletion removes owned posts inside its own
                    // transaction before the user row goes
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_news_posts_author_id")
                            .from(NewsPosts::Table, NewsPosts::AuthorId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Feed is newest-first
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_news_posts_created_at
                ON news_posts (created_at DESC);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_news_posts_author_id
                ON news_posts (author_id);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_news_posts_updated_at
                BEFORE UPDATE ON news_posts
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
            .execute_unprepared("DROP TRIGGER IF EXISTS update_news_posts_updated_at ON news_posts")
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_news_posts_created_at;
                DROP INDEX IF EXISTS idx_news_posts_author_id;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(NewsPosts::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum NewsPosts {
    Table,
    Id,
    Title,
    Content,
    AuthorId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
