use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::shared::api::ApiResponse;
use crate::subject::application::ports::incoming::use_cases::{
    UpdateSubjectCommand, UpdateSubjectError,
};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct UpdateSubjectRequestDto {
    pub name: String,

    #[serde(default)]
    pub teacher_ids: Vec<Uuid>,
}

/// Replaces both the name and the full teacher assignment; the request
/// body is the desired end state, not a delta.
#[put("/api/admin/subjects/{id}")]
pub async fn update_subject_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<UpdateSubjectRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let subject_id = path.into_inner();
    let dto = req.into_inner();

    info!(subject_id = %subject_id, "Subject update");

    let command = match UpdateSubjectCommand::new(subject_id, dto.name, dto.teacher_ids) {
        Ok(c) => c,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.subjects.update.execute(command).await {
        Ok(subject) => ApiResponse::success(subject),

        Err(UpdateSubjectError::SubjectNotFound) => {
            ApiResponse::not_found("SUBJECT_NOT_FOUND", "Subject not found")
        }

        Err(UpdateSubjectError::SubjectAlreadyExists) => {
            warn!(subject_id = %subject_id, "Subject rename collides");
            ApiResponse::conflict("SUBJECT_ALREADY_EXISTS", "A subject with that name already exists")
        }

        Err(UpdateSubjectError::TeacherNotFound) => {
            ApiResponse::not_found("TEACHER_NOT_FOUND", "Teacher not found")
        }

        Err(UpdateSubjectError::NotATeacher) => {
            ApiResponse::bad_request("NOT_A_TEACHER", "Referenced identity is not a teacher")
        }

        Err(UpdateSubjectError::RepositoryError(ref e)) => {
            error!(error = %e, "Subject update failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::Role;
    use crate::subject::application::domain::entities::Subject;
    use crate::subject::application::ports::incoming::use_cases::UpdateSubjectUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::test_helpers::test_token_provider;
    use actix_web::{test, App};
    use async_trait::async_trait;

    struct MockRename;

    #[async_trait]
    impl UpdateSubjectUseCase for MockRename {
        async fn execute(
            &self,
            command: UpdateSubjectCommand,
        ) -> Result<Subject, UpdateSubjectError> {
            Ok(Subject {
                id: command.subject_id(),
                name: command.name().to_string(),
            })
        }
    }

    struct MockMissing;

    #[async_trait]
    impl UpdateSubjectUseCase for MockMissing {
        async fn execute(
            &self,
            _command: UpdateSubjectCommand,
        ) -> Result<Subject, UpdateSubjectError> {
            Err(UpdateSubjectError::SubjectNotFound)
        }
    }

    async fn put_subject(
        app_state: actix_web::web::Data<crate::AppState>,
        subject_id: Uuid,
    ) -> actix_web::dev::ServiceResponse {
        let provider = test_token_provider();
        let token = provider
            .generate_access_token(Uuid::new_v4(), Role::Admin)
            .unwrap();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(provider))
                .service(update_subject_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri(&format!("/api/admin/subjects/{subject_id}"))
            .insert_header(("Authorization", format!("Bearer {token}")))
            .set_json(serde_json::json!({
                "name": "Discrete Mathematics",
                "teacher_ids": [Uuid::new_v4()]
            }))
            .to_request();

        test::call_service(&app, req).await
    }

    #[actix_web::test]
    async fn renaming_a_subject_returns_the_new_row() {
        let app_state = TestAppStateBuilder::default()
            .with_update_subject(MockRename)
            .build();
        let subject_id = Uuid::new_v4();

        let resp = put_subject(app_state, subject_id).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["id"], subject_id.to_string());
        assert_eq!(body["data"]["name"], "Discrete Mathematics");
    }

    #[actix_web::test]
    async fn updating_an_unknown_subject_is_not_found() {
        let app_state = TestAppStateBuilder::default()
            .with_update_subject(MockMissing)
            .build();

        let resp = put_subject(app_state, Uuid::new_v4()).await;
        assert_eq!(resp.status(), 404);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "SUBJECT_NOT_FOUND");
    }
}
