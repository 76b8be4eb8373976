use async_trait::async_trait;
use sea_orm::{DatabaseBackend, DatabaseConnection, FromQueryResult, Statement};
use std::sync::Arc;
use uuid::Uuid;

use crate::admin::application::domain::entities::{PortalCounts, RecentPost};
use crate::admin::application::ports::outgoing::{DashboardQuery, DashboardQueryError};

#[derive(Debug, FromQueryResult)]
struct CountsRow {
    users: i64,
    groups: i64,
    subjects: i64,
    news_posts: i64,
}

#[derive(Debug, FromQueryResult)]
struct RecentPostRow {
    id: Uuid,
    title: String,
    author_name: String,
    created_at: sea_orm::prelude::DateTimeWithTimeZone,
}

#[derive(Clone, Debug)]
pub struct DashboardQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl DashboardQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DashboardQuery for DashboardQueryPostgres {
    async fn fetch_counts(&self) -> Result<PortalCounts, DashboardQueryError> {
        let row = CountsRow::find_by_statement(Statement::from_string(
            DatabaseBackend::Postgres,
            r#"
            SELECT
                (SELECT COUNT(*) FROM users) AS users,
                (SELECT COUNT(*) FROM groups) AS groups,
                (SELECT COUNT(*) FROM subjects) AS subjects,
                (SELECT COUNT(*) FROM news_posts) AS news_posts
            "#,
        ))
        .one(&*self.db)
        .await
        .map_err(|e| DashboardQueryError::DatabaseError(e.to_string()))?
        .ok_or_else(|| DashboardQueryError::DatabaseError("counts query returned no row".into()))?;

        Ok(PortalCounts {
            users: row.users as u64,
            groups: row.groups as u64,
            subjects: row.subjects as u64,
            news_posts: row.news_posts as u64,
        })
    }

    async fn latest_posts(&self, limit: u64) -> Result<Vec<RecentPost>, DashboardQueryError> {
        let rows = RecentPostRow::find_by_statement(Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            SELECT p.id, p.title, u.username AS author_name, p.created_at
            FROM news_posts p
            JOIN users u ON u.id = p.author_id
            ORDER BY p.created_at DESC
            LIMIT $1
            "#,
            [(limit as i64).into()],
        ))
        .all(&*self.db)
        .await
        .map_err(|e| DashboardQueryError::DatabaseError(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|row| RecentPost {
                id: row.id,
                title: row.title,
                author_name: row.author_name,
                created_at: row.created_at.into(),
            })
            .collect())
    }
}
