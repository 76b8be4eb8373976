use std::sync::Arc;

use crate::schedule::application::ports::incoming::use_cases::{
    CreateSlotUseCase, DeleteSlotUseCase, GetGroupScheduleUseCase, GetTeacherScheduleUseCase,
    UpdateSlotUseCase,
};

/// Bundle of schedule use cases injected into the web layer.
#[derive(Clone)]
pub struct ScheduleUseCases {
    pub get_group: Arc<dyn GetGroupScheduleUseCase + Send + Sync>,
    pub get_teacher: Arc<dyn GetTeacherScheduleUseCase + Send + Sync>,
    pub create: Arc<dyn CreateSlotUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateSlotUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteSlotUseCase + Send + Sync>,
}

impl ScheduleUseCases {
    pub fn new(
        get_group: Arc<dyn GetGroupScheduleUseCase + Send + Sync>,
        get_teacher: Arc<dyn GetTeacherScheduleUseCase + Send + Sync>,
        create: Arc<dyn CreateSlotUseCase + Send + Sync>,
        update: Arc<dyn UpdateSlotUseCase + Send + Sync>,
        delete: Arc<dyn DeleteSlotUseCase + Send + Sync>,
    ) -> Self {
        Self {
            get_group,
            get_teacher,
            create,
            update,
            delete,
        }
    }
}
