pub mod image_store;
pub mod password_hasher;
pub mod token_hasher;
pub mod token_provider;
pub mod token_repository;
pub mod user_query;
pub mod user_repository;

pub use image_store::{ImageStoreError, ProfileImageStore};
pub use password_hasher::{HashError, PasswordHasher};
pub use token_provider::{TokenClaims, TokenError, TokenProvider};
pub use token_repository::{TokenRepository, TokenRepositoryError};
pub use user_query::{UserQuery, UserQueryError};
pub use user_repository::{CreateUserData, DeletedAccount, UserRepository, UserRepositoryError};
