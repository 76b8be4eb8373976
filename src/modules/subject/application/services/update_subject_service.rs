use async_trait::async_trait;

use crate::subject::application::{
    domain::entities::Subject,
    ports::incoming::use_cases::{UpdateSubjectCommand, UpdateSubjectError, UpdateSubjectUseCase},
    ports::outgoing::{SubjectRepository, SubjectRepositoryError, UpdateSubjectData},
};

#[derive(Debug, Clone)]
pub struct UpdateSubjectService<R>
where
    R: SubjectRepository + Send + Sync,
{
    repository: R,
}

impl<R> UpdateSubjectService<R>
where
    R: SubjectRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateSubjectUseCase for UpdateSubjectService<R>
where
    R: SubjectRepository + Send + Sync,
{
    async fn execute(&self, command: UpdateSubjectCommand) -> Result<Subject, UpdateSubjectError> {
        let data = UpdateSubjectData {
            subject_id: command.subject_id(),
            name: command.name().to_string(),
            teacher_ids: command.teacher_ids().to_vec(),
        };

        self.repository
            .update_subject(data)
            .await
            .map_err(|e| match e {
                SubjectRepositoryError::SubjectNotFound => UpdateSubjectError::SubjectNotFound,
                SubjectRepositoryError::SubjectAlreadyExists => {
                    UpdateSubjectError::SubjectAlreadyExists
                }
                SubjectRepositoryError::TeacherNotFound => UpdateSubjectError::TeacherNotFound,
                SubjectRepositoryError::NotATeacher => UpdateSubjectError::NotATeacher,
                other => UpdateSubjectError::RepositoryError(other.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};
    use uuid::Uuid;

    use crate::subject::application::ports::outgoing::CreateSubjectData;

    #[derive(Debug, Clone)]
    struct MockSubjectRepository {
        result: Result<Subject, SubjectRepositoryError>,
        updates: Arc<Mutex<Vec<UpdateSubjectData>>>,
    }

    impl MockSubjectRepository {
        fn with_result(result: Result<Subject, SubjectRepositoryError>) -> Self {
            Self {
                result,
                updates: Arc::new(Mutex::new(Vec::new())),
            }
        }
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
            data: UpdateSubjectData,
        ) -> Result<Subject, SubjectRepositoryError> {
            self.updates.lock().unwrap().push(data);
            self.result.clone()
        }

        async fn delete_subject(&self, _subject_id: Uuid) -> Result<(), SubjectRepositoryError> {
            unimplemented!()
        }
    }

    #[tokio::test]
    async fn renaming_and_replacing_teachers() {
        // Arrange
        let expected = Subject {
            id: Uuid::new_v4(),
            name: "Applied Mathematics".to_string(),
        };
        let repository = MockSubjectRepository::with_result(Ok(expected.clone()));
        let updates = repository.updates.clone();
        let service = UpdateSubjectService::new(repository);
        let teacher = Uuid::new_v4();
        let command = UpdateSubjectCommand::new(
            expected.id,
            "Applied Mathematics".to_string(),
            vec![teacher],
        )
        .unwrap();

        // Act
        let result = service.execute(command).await;

        // Assert
        assert_eq!(result.unwrap(), expected);
        let recorded = updates.lock().unwrap();
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].teacher_ids, vec![teacher]);
    }

    #[tokio::test]
    async fn missing_subject_is_reported() {
        // Arrange
        let service = UpdateSubjectService::new(MockSubjectRepository::with_result(Err(
            SubjectRepositoryError::SubjectNotFound,
        )));
        let command =
            UpdateSubjectCommand::new(Uuid::new_v4(), "Physics".to_string(), vec![]).unwrap();

        // Act
        let result = service.execute(command).await;

        // Assert
        assert!(matches!(result, Err(UpdateSubjectError::SubjectNotFound)));
    }

    #[tokio::test]
    async fn non_teacher_in_replacement_set_is_rejected() {
        // Arrange
        let service = UpdateSubjectService::new(MockSubjectRepository::with_result(Err(
            SubjectRepositoryError::NotATeacher,
        )));
        let command =
            UpdateSubjectCommand::new(Uuid::new_v4(), "Physics".to_string(), vec![Uuid::new_v4()])
                .unwrap();

        // Act
        let result = service.execute(command).await;

        // Assert
        assert!(matches!(result, Err(UpdateSubjectError::NotATeacher)));
    }
}
