pub mod sea_orm_entity;

mod subject_query_postgres;
mod subject_repository_postgres;

pub use subject_query_postgres::SubjectQueryPostgres;
pub use subject_repository_postgres::SubjectRepositoryPostgres;
