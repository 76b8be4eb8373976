use std::sync::Arc;

use crate::subject::application::ports::incoming::use_cases::{
    CreateSubjectUseCase, DeleteSubjectUseCase, ListSubjectsUseCase, UpdateSubjectUseCase,
};

/// Bundle of subject use cases injected into the web layer.
#[derive(Clone)]
pub struct SubjectUseCases {
    pub list: Arc<dyn ListSubjectsUseCase + Send + Sync>,
    pub create: Arc<dyn CreateSubjectUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateSubjectUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteSubjectUseCase + Send + Sync>,
}

impl SubjectUseCases {
    pub fn new(
        list: Arc<dyn ListSubjectsUseCase + Send + Sync>,
        create: Arc<dyn CreateSubjectUseCase + Send + Sync>,
        update: Arc<dyn UpdateSubjectUseCase + Send + Sync>,
        delete: Arc<dyn DeleteSubjectUseCase + Send + Sync>,
    ) -> Self {
        Self {
            list,
            create,
            update,
            delete,
        }
    }
}
