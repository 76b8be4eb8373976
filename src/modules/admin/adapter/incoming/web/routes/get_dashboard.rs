use actix_web::{get, web, Responder};
use tracing::error;

use crate::admin::application::ports::incoming::use_cases::GetDashboardError;
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/admin/dashboard")]
pub async fn get_dashboard_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.admin.dashboard.execute().await {
        Ok(dashboard) => ApiResponse::success(dashboard),

        Err(GetDashboardError::QueryFailed(ref e)) => {
            error!(error = %e, "Dashboard assembly failed");
            ApiResponse::internal_error()
        }
    }
}
