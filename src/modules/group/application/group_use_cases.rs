use std::sync::Arc;

use crate::group::application::ports::incoming::use_cases::{
    CreateGroupUseCase, DeleteGroupUseCase, ListGroupsUseCase, UpdateGroupUseCase,
};

/// Bundle of group use cases injected into the web layer.
#[derive(Clone)]
pub struct GroupUseCases {
    pub list: Arc<dyn ListGroupsUseCase + Send + Sync>,
    pub create: Arc<dyn CreateGroupUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateGroupUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteGroupUseCase + Send + Sync>,
}

impl GroupUseCases {
    pub fn new(
        list: Arc<dyn ListGroupsUseCase + Send + Sync>,
        create: Arc<dyn CreateGroupUseCase + Send + Sync>,
        update: Arc<dyn UpdateGroupUseCase + Send + Sync>,
        delete: Arc<dyn DeleteGroupUseCase + Send + Sync>,
    ) -> Self {
        Self {
            list,
            create,
            update,
            delete,
        }
    }
}
