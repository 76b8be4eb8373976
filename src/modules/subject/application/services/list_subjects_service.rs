use async_trait::async_trait;

use crate::subject::application::{
    domain::entities::SubjectWithTeachers,
    ports::incoming::use_cases::{ListSubjectsError, ListSubjectsUseCase},
    ports::outgoing::SubjectQuery,
};

#[derive(Debug, Clone)]
pub struct ListSubjectsService<Q>
where
    Q: SubjectQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListSubjectsService<Q>
where
    Q: SubjectQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListSubjectsUseCase for ListSubjectsService<Q>
where
    Q: SubjectQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<SubjectWithTeachers>, ListSubjectsError> {
        self.query
            .list_subjects()
            .await
            .map_err(|e| ListSubjectsError::QueryFailed(e.to_string()))
    }
}
