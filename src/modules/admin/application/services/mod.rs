mod get_dashboard_service;

pub use get_dashboard_service::GetDashboardService;
