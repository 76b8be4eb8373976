use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseBackend, DatabaseConnection, EntityTrait,
    FromQueryResult, ModelTrait, Set, Statement, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::news::application::domain::entities::{Comment, LikeStatus, NewsPost};
use crate::news::application::ports::outgoing::{
    CreateCommentData, CreatePostData, NewsRepository, NewsRepositoryError, UpdatePostData,
};

use super::sea_orm_entity::news_comments::{
    ActiveModel as CommentActiveModel, Entity as CommentEntity,
};
use super::sea_orm_entity::news_posts::{ActiveModel as PostActiveModel, Entity as PostEntity};

#[derive(Clone, Debug)]
pub struct NewsRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl NewsRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_comment_insert_error(e: sea_orm::DbErr) -> NewsRepositoryError {
        let err_str = e.to_string().to_lowercase();
        // The post can vanish between the feed render and the submit.
        if err_str.contains("fk_news_comments_post_id")
            || err_str.contains("23503")
            || err_str.contains("foreign key")
        {
            return NewsRepositoryError::PostNotFound;
        }
        NewsRepositoryError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl NewsRepository for NewsRepositoryPostgres {
    async fn create_post(&self, data: CreatePostData) -> Result<NewsPost, NewsRepositoryError> {
        let active_post = PostActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(data.title),
            content: Set(data.content),
            author_id: Set(data.author_id),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active_post
            .insert(&*self.db)
            .await
            .map_err(|e| NewsRepositoryError::DatabaseError(e.to_string()))?;

        Ok(inserted.to_post())
    }

    async fn update_post(&self, data: UpdatePostData) -> Result<NewsPost, NewsRepositoryError> {
        let post = PostEntity::find_by_id(data.post_id)
            .one(&*self.db)
            .await
            .map_err(|e| NewsRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(NewsRepositoryError::PostNotFound)?;

        let mut active_post: PostActiveModel = post.into();
        active_post.title = Set(data.title);
        active_post.content = Set(data.content);

        let updated = active_post
            .update(&*self.db)
            .await
            .map_err(|e| NewsRepositoryError::DatabaseError(e.to_string()))?;

        Ok(updated.to_post())
    }

    async fn delete_post(&self, post_id: Uuid) -> Result<(), NewsRepositoryError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| NewsRepositoryError::DatabaseError(e.to_string()))?;

        // Dependent rows first, spelled out rather than left to FK rules.
        for sql in [
            "DELETE FROM news_likes WHERE post_id = $1",
            "DELETE FROM news_comments WHERE post_id = $1",
        ] {
            txn.execute(Statement::from_sql_and_values(
                DatabaseBackend::Postgres,
                sql,
                [post_id.into()],
            ))
            .await
            .map_err(|e| NewsRepositoryError::DatabaseError(e.to_string()))?;
        }

        let deleted = txn
            .execute(Statement::from_sql_and_values(
                DatabaseBackend::Postgres,
                "DELETE FROM news_posts WHERE id = $1",
                [post_id.into()],
            ))
            .await
            .map_err(|e| NewsRepositoryError::DatabaseError(e.to_string()))?;

        if deleted.rows_affected() == 0 {
            return Err(NewsRepositoryError::PostNotFound);
        }

        txn.commit()
            .await
            .map_err(|e| NewsRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn create_comment(
        &self,
        data: CreateCommentData,
    ) -> Result<Comment, NewsRepositoryError> {
        let active_comment = CommentActiveModel {
            id: Set(Uuid::new_v4()),
            content: Set(data.content),
            author_id: Set(data.author_id),
            post_id: Set(data.post_id),
            created_at: NotSet,
        };

        let inserted = active_comment
            .insert(&*self.db)
            .await
            .map_err(Self::map_comment_insert_error)?;

        Ok(inserted.to_comment())
    }

    async fn delete_comment(&self, comment_id: Uuid) -> Result<(), NewsRepositoryError> {
        let comment = CommentEntity::find_by_id(comment_id)
            .one(&*self.db)
            .await
            .map_err(|e| NewsRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(NewsRepositoryError::CommentNotFound)?;

        comment
            .delete(&*self.db)
            .await
            .map_err(|e| NewsRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn toggle_like(
        &self,
        post_id: Uuid,
        user_id: Uuid,
    ) -> Result<LikeStatus, NewsRepositoryError> {
        #[derive(FromQueryResult)]
        struct CountRow {
            count: i64,
        }

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| NewsRepositoryError::DatabaseError(e.to_string()))?;

        // Guarded insert: the composite primary key decides who wins a
        // race, not a prior read.
        let inserted = txn
            .execute(Statement::from_sql_and_values(
                DatabaseBackend::Postgres,
                r#"INSERT INTO news_likes (post_id, user_id) VALUES ($1, $2) ON CONFLICT DO NOTHING"#,
                [post_id.into(), user_id.into()],
            ))
            .await
            .map_err(|e| {
                let err_str = e.to_string().to_lowercase();
                if err_str.contains("fk_news_likes_post_id")
                    || err_str.contains("23503")
                    || err_str.contains("foreign key")
                {
                    NewsRepositoryError::PostNotFound
                } else {
                    NewsRepositoryError::DatabaseError(e.to_string())
                }
            })?;

        let liked = if inserted.rows_affected() == 1 {
            true
        } else {
            // Already liked, so this toggle removes it.
            txn.execute(Statement::from_sql_and_values(
                DatabaseBackend::Postgres,
                r#"DELETE FROM news_likes WHERE post_id = $1 AND user_id = $2"#,
                [post_id.into(), user_id.into()],
            ))
            .await
            .map_err(|e| NewsRepositoryError::DatabaseError(e.to_string()))?;
            false
        };

        let row = CountRow::find_by_statement(Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"SELECT COUNT(*) AS count FROM news_likes WHERE post_id = $1"#,
            [post_id.into()],
        ))
        .one(&txn)
        .await
        .map_err(|e| NewsRepositoryError::DatabaseError(e.to_string()))?;

        txn.commit()
            .await
            .map_err(|e| NewsRepositoryError::DatabaseError(e.to_string()))?;

        let like_count = row.map(|r| r.count).unwrap_or_default() as u64;

        Ok(LikeStatus { liked, like_count })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DbErr, MockDatabase, MockExecResult, Value};
    use std::collections::BTreeMap;

    use super::super::sea_orm_entity::news_comments::Model as CommentModel;
    use super::super::sea_orm_entity::news_posts::Model as PostModel;

    fn post_model(author_id: Uuid, title: &str) -> PostModel {
        let now = Utc::now();
        PostModel {
            id: Uuid::new_v4(),
            title: title.to_string(),
            content: "See the noticeboard for details.".to_string(),
            author_id,
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    fn comment_model(post_id: Uuid, author_id: Uuid) -> CommentModel {
        CommentModel {
            id: Uuid::new_v4(),
            content: "Looking forward to it".to_string(),
            author_id,
            post_id,
            created_at: Utc::now().into(),
        }
    }

    fn count_row(count: i64) -> BTreeMap<&'static str, Value> {
        let mut row = BTreeMap::new();
        row.insert("count", Value::from(count));
        row
    }

    fn exec(rows_affected: u64) -> MockExecResult {
        MockExecResult {
            last_insert_id: 0,
            rows_affected,
        }
    }

    #[tokio::test]
    async fn a_post_is_created_for_its_author() {
        // Arrange
        let author_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![post_model(author_id, "Sports day")]])
            .append_exec_results(vec![exec(1)])
            .into_connection();
        let repository = NewsRepositoryPostgres::new(Arc::new(db));

        // Act
        let created = repository
            .create_post(CreatePostData {
                author_id,
                title: "Sports day".to_string(),
                content: "See the noticeboard for details.".to_string(),
            })
            .await
            .unwrap();

        // Assert
        assert_eq!(created.title, "Sports day");
        assert_eq!(created.author_id, author_id);
    }

    #[tokio::test]
    async fn editing_a_post_rewrites_title_and_content() {
        // Arrange
        let author_id = Uuid::new_v4();
        let existing = post_model(author_id, "Sports day");
        let mut renamed = existing.clone();
        renamed.title = "Sports day moved".to_string();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![existing.clone()], vec![renamed]])
            .append_exec_results(vec![exec(1)])
            .into_connection();
        let repository = NewsRepositoryPostgres::new(Arc::new(db));

        // Act
        let updated = repository
            .update_post(UpdatePostData {
                post_id: existing.id,
                title: "Sports day moved".to_string(),
                content: existing.content.clone(),
            })
            .await
            .unwrap();

        // Assert
        assert_eq!(updated.title, "Sports day moved");
        assert_eq!(updated.id, existing.id);
    }

    #[tokio::test]
    async fn editing_a_missing_post_is_not_found() {
        // Arrange
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<PostModel>::new()])
            .into_connection();
        let repository = NewsRepositoryPostgres::new(Arc::new(db));

        // Act
        let result = repository
            .update_post(UpdatePostData {
                post_id: Uuid::new_v4(),
                title: "x".to_string(),
                content: "y".to_string(),
            })
            .await;

        // Assert
        assert!(matches!(result, Err(NewsRepositoryError::PostNotFound)));
    }

    #[tokio::test]
    async fn a_post_takes_its_likes_and_comments_with_it() {
        // Arrange
        // likes, comments, then the post row itself
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![exec(4), exec(2), exec(1)])
            .into_connection();
        let repository = NewsRepositoryPostgres::new(Arc::new(db));

        // Act
        let result = repository.delete_post(Uuid::new_v4()).await;

        // Assert
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn deleting_a_missing_post_is_not_found() {
        // Arrange
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![exec(0), exec(0), exec(0)])
            .into_connection();
        let repository = NewsRepositoryPostgres::new(Arc::new(db));

        // Act
        let result = repository.delete_post(Uuid::new_v4()).await;

        // Assert
        assert!(matches!(result, Err(NewsRepositoryError::PostNotFound)));
    }

    #[tokio::test]
    async fn a_comment_lands_on_its_post() {
        // Arrange
        let post_id = Uuid::new_v4();
        let author_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![comment_model(post_id, author_id)]])
            .append_exec_results(vec![exec(1)])
            .into_connection();
        let repository = NewsRepositoryPostgres::new(Arc::new(db));

        // Act
        let comment = repository
            .create_comment(CreateCommentData {
                post_id,
                author_id,
                content: "Looking forward to it".to_string(),
            })
            .await
            .unwrap();

        // Assert
        assert_eq!(comment.post_id, post_id);
        assert_eq!(comment.author_id, author_id);
    }

    #[tokio::test]
    async fn commenting_on_a_vanished_post_is_not_found() {
        // Arrange
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom(
                "insert or update on table \"news_comments\" violates foreign key constraint \"fk_news_comments_post_id\""
                    .to_string(),
            )])
            .into_connection();
        let repository = NewsRepositoryPostgres::new(Arc::new(db));

        // Act
        let result = repository
            .create_comment(CreateCommentData {
                post_id: Uuid::new_v4(),
                author_id: Uuid::new_v4(),
                content: "too late".to_string(),
            })
            .await;

        // Assert
        assert!(matches!(result, Err(NewsRepositoryError::PostNotFound)));
    }

    #[tokio::test]
    async fn deleting_a_missing_comment_is_not_found() {
        // Arrange
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<CommentModel>::new()])
            .into_connection();
        let repository = NewsRepositoryPostgres::new(Arc::new(db));

        // Act
        let result = repository.delete_comment(Uuid::new_v4()).await;

        // Assert
        assert!(matches!(result, Err(NewsRepositoryError::CommentNotFound)));
    }

    #[tokio::test]
    async fn the_first_toggle_likes_the_post() {
        // Arrange
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![exec(1)])
            .append_query_results(vec![vec![count_row(1)]])
            .into_connection();
        let repository = NewsRepositoryPostgres::new(Arc::new(db));

        // Act
        let status = repository
            .toggle_like(Uuid::new_v4(), Uuid::new_v4())
            .await
            .unwrap();

        // Assert
        assert!(status.liked);
        assert_eq!(status.like_count, 1);
    }

    #[tokio::test]
    async fn the_second_toggle_takes_the_like_back() {
        // Arrange
        // The guarded insert hits the existing row, then the delete runs.
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![exec(0), exec(1)])
            .append_query_results(vec![vec![count_row(0)]])
            .into_connection();
        let repository = NewsRepositoryPostgres::new(Arc::new(db));

        // Act
        let status = repository
            .toggle_like(Uuid::new_v4(), Uuid::new_v4())
            .await
            .unwrap();

        // Assert
        assert!(!status.liked);
        assert_eq!(status.like_count, 0);
    }

    #[tokio::test]
    async fn liking_a_vanished_post_is_not_found() {
        // Arrange
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_errors([DbErr::Custom(
                "insert or update on table \"news_likes\" violates foreign key constraint \"fk_news_likes_post_id\""
                    .to_string(),
            )])
            .into_connection();
        let repository = NewsRepositoryPostgres::new(Arc::new(db));

        // Act
        let result = repository.toggle_like(Uuid::new_v4(), Uuid::new_v4()).await;

        // Assert
        assert!(matches!(result, Err(NewsRepositoryError::PostNotFound)));
    }
}
