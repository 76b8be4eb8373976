pub mod sea_orm_entity;

mod news_query_postgres;
mod news_repository_postgres;

pub use news_query_postgres::NewsQueryPostgres;
pub use news_repository_postgres::NewsRepositoryPostgres;
