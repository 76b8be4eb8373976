use actix_web::{delete, web, Responder};
use tracing::{error, info};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::schedule::application::ports::incoming::use_cases::DeleteSlotError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/admin/schedule/{id}")]
pub async fn delete_slot_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let slot_id = path.into_inner();

    info!(slot_id = %slot_id, "Slot removal");

    match data.schedule.delete.execute(slot_id).await {
        Ok(()) => ApiResponse::<()>::no_content(),

        Err(DeleteSlotError::SlotNotFound) => {
            ApiResponse::not_found("SLOT_NOT_FOUND", "Schedule slot not found")
        }

        Err(DeleteSlotError::RepositoryError(ref e)) => {
            error!(error = %e, "Slot removal failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::Role;
    use crate::schedule::application::ports::incoming::use_cases::DeleteSlotUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::test_helpers::test_token_provider;
    use actix_web::{test, App};
    use async_trait::async_trait;

    struct MockRemoveOk;

    #[async_trait]
    impl DeleteSlotUseCase for MockRemoveOk {
        async fn execute(&self, _slot_id: Uuid) -> Result<(), DeleteSlotError> {
            Ok(())
        }
    }

    struct MockGone;

    #[async_trait]
    impl DeleteSlotUseCase for MockGone {
        async fn execute(&self, _slot_id: Uuid) -> Result<(), DeleteSlotError> {
            Err(DeleteSlotError::SlotNotFound)
        }
    }

    async fn delete_slot(
        app_state: actix_web::web::Data<crate::AppState>,
        role: Role,
    ) -> actix_web::dev::ServiceResponse {
        let provider = test_token_provider();
        let token = provider
            .generate_access_token(Uuid::new_v4(), role)
            .unwrap();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(provider))
                .service(delete_slot_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/admin/schedule/{}", Uuid::new_v4()))
            .insert_header(("Authorization", format!("Bearer {token}")))
            .to_request();

        test::call_service(&app, req).await
    }

    #[actix_web::test]
    async fn removing_a_slot_returns_no_content() {
        let app_state = TestAppStateBuilder::default()
            .with_delete_slot(MockRemoveOk)
            .build();

        let resp = delete_slot(app_state, Role::Admin).await;
        assert_eq!(resp.status(), 204);
    }

    #[actix_web::test]
    async fn removing_an_unknown_slot_is_not_found() {
        let app_state = TestAppStateBuilder::default()
            .with_delete_slot(MockGone)
            .build();

        let resp = delete_slot(app_state, Role::Admin).await;
        assert_eq!(resp.status(), 404);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "SLOT_NOT_FOUND");
    }

    #[actix_web::test]
    async fn a_teacher_cannot_remove_slots() {
        let app_state = TestAppStateBuilder::default()
            .with_delete_slot(MockRemoveOk)
            .build();

        let resp = delete_slot(app_state, Role::Teacher).await;
        assert_eq!(resp.status(), 403);
    }
}
