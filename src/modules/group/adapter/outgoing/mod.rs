pub mod sea_orm_entity;

mod group_query_postgres;
mod group_repository_postgres;

pub use group_query_postgres::GroupQueryPostgres;
pub use group_repository_postgres::GroupRepositoryPostgres;
