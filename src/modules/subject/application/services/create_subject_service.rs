use async_trait::async_trait;

use crate::subject::application::{
    domain::entities::Subject,
    ports::incoming::use_cases::{CreateSubjectCommand, CreateSubjectError, CreateSubjectUseCase},
    ports::outgoing::{CreateSubjectData, SubjectRepository, SubjectRepositoryError},
};

#[derive(Debug, Clone)]
pub struct CreateSubjectService<R>
where
    R: SubjectRepository + Send + Sync,
{
    repository: R,
}

impl<R> CreateSubjectService<R>
where
    R: SubjectRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateSubjectUseCase for CreateSubjectService<R>
where
    R: SubjectRepository + Send + Sync,
{
    async fn execute(&self, command: CreateSubjectCommand) -> Result<Subject, CreateSubjectError> {
        let data = CreateSubjectData {
            name: command.name().to_string(),
            teacher_ids: command.teacher_ids().to_vec(),
        };

        self.repository
            .create_subject(data)
            .await
            .map_err(|e| match e {
                SubjectRepositoryError::SubjectAlreadyExists => {
                    CreateSubjectError::SubjectAlreadyExists
                }
                SubjectRepositoryError::TeacherNotFound => CreateSubjectError::TeacherNotFound,
                SubjectRepositoryError::NotATeacher => CreateSubjectError::NotATeacher,
                other => CreateSubjectError::RepositoryError(other.to_string()),
            })
    }
}
