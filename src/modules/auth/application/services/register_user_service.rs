use async_trait::async_trait;

use crate::auth::application::ports::{
    incoming::use_cases::{RegisterUserCommand, RegisterUserError, RegisterUserUseCase},
    outgoing::{CreateUserData, PasswordHasher, UserRepository, UserRepositoryError},
};
use crate::auth::application::domain::entities::User;

#[derive(Debug, Clone)]
pub struct RegisterUserService<R, H>
where
    R: UserRepository + Send + Sync,
    H: PasswordHasher + Send + Sync,
{
    repository: R,
    hasher: H,
}

impl<R, H> RegisterUserService<R, H>
where
    R: UserRepository + Send + Sync,
    H: PasswordHasher + Send + Sync,
{
    pub fn new(repository: R, hasher: H) -> Self {
        Self { repository, hasher }
    }
}

#[async_trait]
impl<R, H> RegisterUserUseCase for RegisterUserService<R, H>
where
    R: UserRepository + Send + Sync,
    H: PasswordHasher + Send + Sync,
{
    async fn execute(&self, command: RegisterUserCommand) -> Result<User, RegisterUserError> {
        let password_hash = self
            .hasher
            .hash_password(command.password())
            .await
            .map_err(|_| RegisterUserError::HashingFailed)?;

        let data = CreateUserData {
            username: command.username().to_string(),
            email: command.email().to_string(),
            password_hash,
            assignment: *command.assignment(),
        };

        self.repository.create_user(data).await.map_err(|e| match e {
            UserRepositoryError::UserAlreadyExists => RegisterUserError::UserAlreadyExists,
            UserRepositoryError::GroupNotFound => RegisterUserError::GroupNotFound,
            other => RegisterUserError::RepositoryError(other.to_string()),
        })
    }
}
