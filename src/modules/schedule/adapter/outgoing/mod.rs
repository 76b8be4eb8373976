pub mod sea_orm_entity;

mod schedule_query_postgres;
mod schedule_repository_postgres;

pub use schedule_query_postgres::ScheduleQueryPostgres;
pub use schedule_repository_postgres::ScheduleRepositoryPostgres;
