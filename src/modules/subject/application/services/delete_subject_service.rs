use async_trait::async_trait;
use uuid::Uuid;

use crate::subject::application::ports::{
    incoming::use_cases::{DeleteSubjectError, DeleteSubjectUseCase},
    outgoing::{SubjectRepository, SubjectRepositoryError},
};

#[derive(Debug, Clone)]
pub struct DeleteSubjectService<R>
where
    R: SubjectRepository + Send + Sync,
{
    repository: R,
}

impl<R> DeleteSubjectService<R>
where
    R: SubjectRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteSubjectUseCase for DeleteSubjectService<R>
where
    R: SubjectRepository + Send + Sync,
{
    async fn execute(&self, subject_id: Uuid) -> Result<(), DeleteSubjectError> {
        self.repository
            .delete_subject(subject_id)
            .await
            .map_err(|e| match e {
                SubjectRepositoryError::SubjectNotFound => DeleteSubjectError::SubjectNotFound,
                SubjectRepositoryError::SubjectInUse => DeleteSubjectError::SubjectInUse,
                other => DeleteSubjectError::RepositoryError(other.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use crate::subject::application::domain::entities::Subject;
    use crate::subject::application::ports::outgoing::{CreateSubjectData, UpdateSubjectData};

    #[derive(Debug, Clone)]
    struct MockSubjectRepository {
        result: Result<(), SubjectRepositoryError>,
    }

    #[async_trait]
    impl SubjectRepository for MockSubjectRepository {
        async fn create_subject(
            &self,
            _data: CreateSubjectData,
        ) -> Result<Subject, SubjectRepositoryError> {
            unimplemented!()
        }

        async fn update_subject(
            &self,
            _data: UpdateSubjectData,
        ) -> Result<Subject, SubjectRepositoryError> {
            unimplemented!()
        }

        async fn delete_subject(&self, _subject_id: Uuid) -> Result<(), SubjectRepositoryError> {
            self.result.clone()
        }
    }

    #[tokio::test]
    async fn deleting_an_unused_subject() {
        let service = DeleteSubjectService::new(MockSubjectRepository { result: Ok(()) });

        let result = service.execute(Uuid::new_v4()).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn a_scheduled_subject_is_not_deletable() {
        let service = DeleteSubjectService::new(MockSubjectRepository {
            result: Err(SubjectRepositoryError::SubjectInUse),
        });

        let result = service.execute(Uuid::new_v4()).await;

        assert!(matches!(result, Err(DeleteSubjectError::SubjectInUse)));
    }

    #[tokio::test]
    async fn deleting_a_missing_subject() {
        let service = DeleteSubjectService::new(MockSubjectRepository {
            result: Err(SubjectRepositoryError::SubjectNotFound),
        });

        let result = service.execute(Uuid::new_v4()).await;

        assert!(matches!(result, Err(DeleteSubjectError::SubjectNotFound)));
    }
}
