use async_trait::async_trait;
use sea_orm::{
    DatabaseBackend, DatabaseConnection, EntityTrait, FromQueryResult, Statement,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::news::application::domain::entities::{
    AuthorPost, Comment, CommentView, NewsPost, PostDetail, PostSummary,
};
use crate::news::application::ports::outgoing::{NewsQuery, NewsQueryError};

use super::sea_orm_entity::news_comments::Entity as CommentEntity;
use super::sea_orm_entity::news_posts::Entity as PostEntity;

/// Feed row with the aggregates resolved per post. Correlated subqueries
/// instead of joins, so a post with both likes and comments is not
/// multiplied into a cross product.
#[derive(Debug, FromQueryResult)]
struct PostSummaryRow {
    id: Uuid,
    title: String,
    content: String,
    author_id: Uuid,
    author_name: String,
    created_at: sea_orm::prelude::DateTimeWithTimeZone,
    like_count: i64,
    comment_count: i64,
    liked_by_caller: bool,
}

impl PostSummaryRow {
    fn into_summary(self) -> PostSummary {
        PostSummary {
            id: self.id,
            title: self.title,
            content: self.content,
            author_id: self.author_id,
            author_name: self.author_name,
            created_at: self.created_at.into(),
            like_count: self.like_count as u64,
            comment_count: self.comment_count as u64,
            liked_by_caller: self.liked_by_caller,
        }
    }
}

#[derive(Debug, FromQueryResult)]
struct CommentViewRow {
    id: Uuid,
    author_id: Uuid,
    author_name: String,
    content: String,
    created_at: sea_orm::prelude::DateTimeWithTimeZone,
}

impl CommentViewRow {
    fn into_view(self) -> CommentView {
        CommentView {
            id: self.id,
            author_id: self.author_id,
            author_name: self.author_name,
            content: self.content,
            created_at: self.created_at.into(),
        }
    }
}

#[derive(Debug, FromQueryResult)]
struct AuthorPostRow {
    id: Uuid,
    title: String,
    created_at: sea_orm::prelude::DateTimeWithTimeZone,
    like_count: i64,
    comment_count: i64,
}

impl AuthorPostRow {
    fn into_author_post(self) -> AuthorPost {
        AuthorPost {
            id: self.id,
            title: self.title,
            created_at: self.created_at.into(),
            like_count: self.like_count as u64,
            comment_count: self.comment_count as u64,
        }
    }
}

const POST_SUMMARY_SELECT: &str = r#"
SELECT p.id,
       p.title,
       p.content,
       p.author_id,
       u.username AS author_name,
       p.created_at,
       (SELECT COUNT(*) FROM news_likes l WHERE l.post_id = p.id) AS like_count,
       (SELECT COUNT(*) FROM news_comments c WHERE c.post_id = p.id) AS comment_count,
       EXISTS(
           SELECT 1 FROM news_likes l
           WHERE l.post_id = p.id AND l.user_id = $1
       ) AS liked_by_caller
FROM news_posts p
JOIN users u ON u.id = p.author_id
"#;

#[derive(Clone, Debug)]
pub struct NewsQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl NewsQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl NewsQuery for NewsQueryPostgres {
    async fn list_posts(&self, caller_id: Uuid) -> Result<Vec<PostSummary>, NewsQueryError> {
        let sql = format!("{POST_SUMMARY_SELECT} ORDER BY p.created_at DESC");

        let rows = PostSummaryRow::find_by_statement(Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            sql,
            [caller_id.into()],
        ))
        .all(&*self.db)
        .await
        .map_err(|e| NewsQueryError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(PostSummaryRow::into_summary).collect())
    }

    async fn get_post(
        &self,
        post_id: Uuid,
        caller_id: Uuid,
    ) -> Result<Option<PostDetail>, NewsQueryError> {
        let sql = format!("{POST_SUMMARY_SELECT} WHERE p.id = $2");

        let row = PostSummaryRow::find_by_statement(Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            sql,
            [caller_id.into(), post_id.into()],
        ))
        .one(&*self.db)
        .await
        .map_err(|e| NewsQueryError::DatabaseError(e.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let comments = CommentViewRow::find_by_statement(Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            SELECT c.id, c.author_id, u.username AS author_name, c.content, c.created_at
            FROM news_comments c
            JOIN users u ON u.id = c.author_id
            WHERE c.post_id = $1
            ORDER BY c.created_at
            "#,
            [post_id.into()],
        ))
        .all(&*self.db)
        .await
        .map_err(|e| NewsQueryError::DatabaseError(e.to_string()))?;

        Ok(Some(PostDetail {
            post: row.into_summary(),
            comments: comments.into_iter().map(CommentViewRow::into_view).collect(),
        }))
    }

    async fn find_post(&self, post_id: Uuid) -> Result<Option<NewsPost>, NewsQueryError> {
        let post = PostEntity::find_by_id(post_id)
            .one(&*self.db)
            .await
            .map_err(|e| NewsQueryError::DatabaseError(e.to_string()))?;

        Ok(post.map(|model| model.to_post()))
    }

    async fn find_comment(&self, comment_id: Uuid) -> Result<Option<Comment>, NewsQueryError> {
        let comment = CommentEntity::find_by_id(comment_id)
            .one(&*self.db)
            .await
            .map_err(|e| NewsQueryError::DatabaseError(e.to_string()))?;

        Ok(comment.map(|model| model.to_comment()))
    }

    async fn list_author_posts(
        &self,
        author_id: Uuid,
    ) -> Result<Vec<AuthorPost>, NewsQueryError> {
        let rows = AuthorPostRow::find_by_statement(Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            SELECT p.id,
                   p.title,
                   p.created_at,
                   (SELECT COUNT(*) FROM news_likes l WHERE l.post_id = p.id) AS like_count,
                   (SELECT COUNT(*) FROM news_comments c WHERE c.post_id = p.id) AS comment_count
            FROM news_posts p
            WHERE p.author_id = $1
            ORDER BY p.created_at DESC
            "#,
            [author_id.into()],
        ))
        .all(&*self.db)
        .await
        .map_err(|e| NewsQueryError::DatabaseError(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(AuthorPostRow::into_author_post)
            .collect())
    }
}
