use actix_web::{get, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::auth::application::ports::incoming::use_cases::ListPendingRegistrationsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// The review queue, oldest registration first.
#[get("/api/admin/registrations")]
pub async fn list_pending_registrations_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.auth.list_pending.execute().await {
        Ok(users) => ApiResponse::success(users),

        Err(ListPendingRegistrationsError::RepositoryError(ref e)) => {
            error!(error = %e, "Pending registrations query failed");
            ApiResponse::internal_error()
        }
    }
}
