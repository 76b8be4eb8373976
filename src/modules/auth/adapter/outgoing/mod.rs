pub mod sea_orm_entity;

pub mod jwt;
pub mod security;

mod image_store_fs;
mod token_repository_redis;
mod user_query_postgres;
mod user_repository_postgres;

pub use image_store_fs::ImageStoreFs;
pub use token_repository_redis::RedisTokenRepository;
pub use user_query_postgres::UserQueryPostgres;
pub use user_repository_postgres::UserRepositoryPostgres;
