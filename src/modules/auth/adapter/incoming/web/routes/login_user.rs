use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::domain::entities::Role;
use crate::auth::application::ports::incoming::use_cases::{LoginCommand, LoginError};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequestDto {
    #[schema(example = "ivan.petrov")]
    pub username: String,

    #[schema(example = "correct-horse-battery")]
    pub password: String,

    /// The role the caller claims to hold; it must match the stored one.
    #[schema(example = "student")]
    pub role: String,
}

//
// ──────────────────────────────────────────────────────────
// Response DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponseDto {
    /// JWT access token (short-lived)
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub access_token: String,

    /// JWT refresh token (long-lived)
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub refresh_token: String,

    pub user: LoginUserInfo,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginUserInfo {
    pub id: Uuid,

    #[schema(example = "ivan.petrov")]
    pub username: String,

    #[schema(example = "student")]
    pub role: String,

    /// Present for students only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<Uuid>,

    /// Present for students only.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = 1)]
    pub course: Option<i16>,
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// Log in
///
/// Checks the claimed role, then the approval status, then the password,
/// and only issues tokens when all three pass.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (
            status = 200,
            description = "Login successful",
            body = inline(SuccessResponse<LoginResponseDto>),
            example = json!({
                "success": true,
                "data": {
                    "access_token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
                    "refresh_token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
                    "user": {
                        "id": "5f8d7a2e-4c1b-4f62-9d3a-8e2b0c6f1a47",
                        "username": "ivan.petrov",
                        "role": "student",
                        "group_id": "0e2cda2a-91a8-4a07-b6da-80600dcdc1f8",
                        "course": 1
                    }
                }
            })
        ),
        (
            status = 401,
            description = "Unknown user, wrong role or wrong password",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INVALID_CREDENTIALS",
                    "message": "Invalid username, role or password"
                }
            })
        ),
        (
            status = 403,
            description = "Registration not approved",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "AWAITING_APPROVAL",
                    "message": "Your registration is awaiting admin approval"
                }
            })
        ),
    )
)]
#[post("/api/auth/login")]
pub async fn login_user_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    info!(username = %dto.username, "Login attempt");

    let Ok(role) = dto.role.parse::<Role>() else {
        return ApiResponse::bad_request("VALIDATION_ERROR", "Role must be student, teacher or admin");
    };

    let command = match LoginCommand::new(dto.username, dto.password, role) {
        Ok(c) => c,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.auth.login.execute(command).await {
        Ok(result) => {
            info!(user_id = %result.user.id, role = result.user.role.as_str(), "User logged in");

            ApiResponse::success(LoginResponseDto {
                access_token: result.access_token,
                refresh_token: result.refresh_token,
                user: LoginUserInfo {
                    id: result.user.id,
                    username: result.user.username,
                    role: result.user.role.as_str().to_string(),
                    group_id: result.user.group_id,
                    course: result.user.course.map(|c| c.value()),
                },
            })
        }

        // Unknown user, wrong role and wrong password are deliberately
        // indistinguishable to the caller.
        Err(LoginError::UserNotFound)
        | Err(LoginError::RoleMismatch(_))
        | Err(LoginError::InvalidPassword) => {
            warn!("Login failed: credentials rejected");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid username, role or password")
        }

        Err(LoginError::AwaitingApproval) => {
            warn!("Login failed: registration still pending");
            ApiResponse::forbidden(
                "AWAITING_APPROVAL",
                "Your registration is awaiting admin approval",
            )
        }

        Err(LoginError::RegistrationRejected) => {
            warn!("Login failed: registration was rejected");
            ApiResponse::forbidden(
                "REGISTRATION_REJECTED",
                "Your registration was rejected, please register again",
            )
        }

        Err(LoginError::VerificationFailed(ref e)) => {
            error!(error = %e, "Password verification failed");
            ApiResponse::internal_error()
        }

        Err(LoginError::TokenGenerationFailed(ref e)) => {
            error!(error = %e, "Token generation failed");
            ApiResponse::internal_error()
        }

        Err(LoginError::QueryError(ref e)) => {
            error!(error = %e, "Database query failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::Course;
    use crate::auth::application::ports::incoming::use_cases::{
        LoggedInUser, LoginResult, LoginUserUseCase,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::load_test_env;
    use actix_web::{test, App};
    use async_trait::async_trait;

    fn student_login_result() -> LoginResult {
        LoginResult {
            access_token: "header.payload.access".to_string(),
            refresh_token: "header.payload.refresh".to_string(),
            user: LoggedInUser {
                id: Uuid::new_v4(),
                username: "ivan.petrov".to_string(),
                role: Role::Student,
                group_id: Some(Uuid::new_v4()),
                course: Some(Course::new(1).unwrap()),
            },
        }
    }

    #[derive(Clone)]
    struct MockLoginSuccess;

    #[async_trait]
    impl LoginUserUseCase for MockLoginSuccess {
        async fn execute(&self, _command: LoginCommand) -> Result<LoginResult, LoginError> {
            Ok(student_login_result())
        }
    }

    #[derive(Clone)]
    struct MockLoginFails(LoginError);

    #[async_trait]
    impl LoginUserUseCase for MockLoginFails {
        async fn execute(&self, _command: LoginCommand) -> Result<LoginResult, LoginError> {
            Err(self.0.clone())
        }
    }

    fn login_json(role: &str) -> serde_json::Value {
        serde_json::json!({
            "username": "ivan.petrov",
            "password": "correct-horse-battery",
            "role": role
        })
    }

    #[actix_web::test]
    async fn a_valid_login_returns_tokens_and_the_user() {
        load_test_env();
        let app_state = TestAppStateBuilder::default()
            .with_login(MockLoginSuccess)
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(login_user_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(login_json("student"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert!(body["data"]["access_token"].is_string());
        assert!(body["data"]["refresh_token"].is_string());
        assert_eq!(body["data"]["user"]["username"], "ivan.petrov");
        assert_eq!(body["data"]["user"]["role"], "student");
        assert_eq!(body["data"]["user"]["course"], 1);
    }

    #[actix_web::test]
    async fn wrong_password_and_wrong_role_read_the_same() {
        for error in [
            LoginError::UserNotFound,
            LoginError::RoleMismatch(Role::Teacher),
            LoginError::InvalidPassword,
        ] {
            let app_state = TestAppStateBuilder::default()
                .with_login(MockLoginFails(error))
                .build();

            let app =
                test::init_service(App::new().app_data(app_state).service(login_user_handler))
                    .await;

            let req = test::TestRequest::post()
                .uri("/api/auth/login")
                .set_json(login_json("student"))
                .to_request();

            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), 401);

            let body: serde_json::Value = test::read_body_json(resp).await;
            assert_eq!(body["error"]["code"], "INVALID_CREDENTIALS");
        }
    }

    #[actix_web::test]
    async fn a_pending_registration_cannot_log_in() {
        let app_state = TestAppStateBuilder::default()
            .with_login(MockLoginFails(LoginError::AwaitingApproval))
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(login_user_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(login_json("student"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 403);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "AWAITING_APPROVAL");
    }

    #[actix_web::test]
    async fn a_rejected_registration_is_told_to_reapply() {
        let app_state = TestAppStateBuilder::default()
            .with_login(MockLoginFails(LoginError::RegistrationRejected))
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(login_user_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(login_json("student"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 403);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "REGISTRATION_REJECTED");
    }

    #[actix_web::test]
    async fn an_unknown_role_is_rejected_before_the_use_case_runs() {
        let app_state = TestAppStateBuilder::default().build();

        let app =
            test::init_service(App::new().app_data(app_state).service(login_user_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(login_json("dean"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn an_empty_username_is_rejected() {
        let app_state = TestAppStateBuilder::default().build();

        let app =
            test::init_service(App::new().app_data(app_state).service(login_user_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(serde_json::json!({
                "username": "   ",
                "password": "whatever1",
                "role": "student"
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
    }

    #[actix_web::test]
    async fn a_broken_query_is_an_internal_error() {
        let app_state = TestAppStateBuilder::default()
            .with_login(MockLoginFails(LoginError::QueryError(
                "connection pool exhausted".to_string(),
            )))
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(login_user_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(login_json("student"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 500);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
    }
}
