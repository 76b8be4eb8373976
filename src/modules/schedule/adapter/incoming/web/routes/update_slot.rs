use actix_web::{put, web, Responder};
use tracing::{error, info, warn};
use uuid::Uuid;

use super::create_slot::{parse_time, SlotRequestDto, SlotResponseDto};
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::schedule::application::ports::incoming::use_cases::{UpdateSlotCommand, UpdateSlotError};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[put("/api/admin/schedule/{id}")]
pub async fn update_slot_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<SlotRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let slot_id = path.into_inner();
    let dto = req.into_inner();

    let (start_time, end_time) = match (parse_time(&dto.start_time), parse_time(&dto.end_time)) {
        (Some(s), Some(e)) => (s, e),
        _ => return ApiResponse::bad_request("VALIDATION_ERROR", "Times must be HH:MM"),
    };

    info!(slot_id = %slot_id, weekday = dto.weekday, "Slot move");

    let command = match UpdateSlotCommand::new(
        slot_id,
        dto.group_id,
        dto.subject_id,
        dto.teacher_id,
        dto.course,
        dto.weekday,
        start_time,
        end_time,
    ) {
        Ok(c) => c,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.schedule.update.execute(command).await {
        Ok(slot) => ApiResponse::success(SlotResponseDto::from(slot)),

        Err(UpdateSlotError::SlotNotFound) => {
            ApiResponse::not_found("SLOT_NOT_FOUND", "Schedule slot not found")
        }

        Err(UpdateSlotError::GroupConflict) => {
            warn!(slot_id = %slot_id, "Move overlaps the group's week");
            ApiResponse::conflict("GROUP_CONFLICT", "The group already has a class at that time")
        }

        Err(UpdateSlotError::TeacherConflict) => {
            warn!(slot_id = %slot_id, "Move overlaps the teacher's week");
            ApiResponse::conflict(
                "TEACHER_CONFLICT",
                "The teacher already has a class at that time",
            )
        }

        Err(UpdateSlotError::GroupNotFound) => {
            ApiResponse::not_found("GROUP_NOT_FOUND", "Group not found")
        }

        Err(UpdateSlotError::SubjectNotFound) => {
            ApiResponse::not_found("SUBJECT_NOT_FOUND", "Subject not found")
        }

        Err(UpdateSlotError::TeacherNotFound) => {
            ApiResponse::not_found("TEACHER_NOT_FOUND", "Teacher not found")
        }

        Err(UpdateSlotError::NotATeacher) => {
            ApiResponse::bad_request("NOT_A_TEACHER", "Referenced identity is not a teacher")
        }

        Err(UpdateSlotError::RepositoryError(ref e)) => {
            error!(error = %e, "Slot move failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::Role;
    use crate::schedule::application::domain::entities::ScheduleSlot;
    use crate::schedule::application::ports::incoming::use_cases::UpdateSlotUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::test_helpers::test_token_provider;
    use actix_web::{test, App};
    use async_trait::async_trait;

    struct MockMoveOk;

    #[async_trait]
    impl UpdateSlotUseCase for MockMoveOk {
        async fn execute(
            &self,
            command: UpdateSlotCommand,
        ) -> Result<ScheduleSlot, UpdateSlotError> {
            Ok(ScheduleSlot {
                id: command.slot_id(),
                group_id: command.group_id(),
                subject_id: command.subject_id(),
                teacher_id: command.teacher_id(),
                course: command.course(),
                weekday: command.weekday(),
                start_time: command.start_time(),
                end_time: command.end_time(),
            })
        }
    }

    struct MockGone;

    #[async_trait]
    impl UpdateSlotUseCase for MockGone {
        async fn execute(
            &self,
            _command: UpdateSlotCommand,
        ) -> Result<ScheduleSlot, UpdateSlotError> {
            Err(UpdateSlotError::SlotNotFound)
        }
    }

    async fn put_slot(
        app_state: actix_web::web::Data<crate::AppState>,
        slot_id: Uuid,
    ) -> actix_web::dev::ServiceResponse {
        let provider = test_token_provider();
        let token = provider
            .generate_access_token(Uuid::new_v4(), Role::Admin)
            .unwrap();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(provider))
                .service(update_slot_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri(&format!("/api/admin/schedule/{slot_id}"))
            .insert_header(("Authorization", format!("Bearer {token}")))
            .set_json(serde_json::json!({
                "group_id": Uuid::new_v4(),
                "subject_id": Uuid::new_v4(),
                "teacher_id": Uuid::new_v4(),
                "course": 3,
                "weekday": 4,
                "start_time": "11:00",
                "end_time": "12:30"
            }))
            .to_request();

        test::call_service(&app, req).await
    }

    #[actix_web::test]
    async fn moving_a_slot_returns_the_new_row() {
        let app_state = TestAppStateBuilder::default()
            .with_update_slot(MockMoveOk)
            .build();
        let slot_id = Uuid::new_v4();

        let resp = put_slot(app_state, slot_id).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["id"], slot_id.to_string());
        assert_eq!(body["data"]["weekday"], 4);
        assert_eq!(body["data"]["start_time"], "11:00");
    }

    #[actix_web::test]
    async fn moving_an_unknown_slot_is_not_found() {
        let app_state = TestAppStateBuilder::default()
            .with_update_slot(MockGone)
            .build();

        let resp = put_slot(app_state, Uuid::new_v4()).await;
        assert_eq!(resp.status(), 404);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "SLOT_NOT_FOUND");
    }
}
