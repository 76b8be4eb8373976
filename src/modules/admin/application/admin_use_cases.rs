use std::sync::Arc;

use crate::admin::application::ports::incoming::use_cases::GetDashboardUseCase;

/// Bundle of admin use cases injected into the web layer.
#[derive(Clone)]
pub struct AdminUseCases {
    pub dashboard: Arc<dyn GetDashboardUseCase + Send + Sync>,
}

impl AdminUseCases {
    pub fn new(dashboard: Arc<dyn GetDashboardUseCase + Send + Sync>) -> Self {
        Self { dashboard }
    }
}
