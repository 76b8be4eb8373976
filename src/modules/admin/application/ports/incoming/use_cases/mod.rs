mod get_dashboard_use_case;

pub use get_dashboard_use_case::{GetDashboardError, GetDashboardUseCase};
