use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::group::application::domain::entities::Group;
use crate::group::application::ports::incoming::use_cases::ListGroupsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct GroupDto {
    pub id: Uuid,

    #[schema(example = "CS-201")]
    pub name: String,

    #[schema(example = 2)]
    pub course: i16,
}

impl From<Group> for GroupDto {
    fn from(group: Group) -> Self {
        Self {
            id: group.id,
            name: group.name,
            course: group.course.value(),
        }
    }
}

/// List groups
///
/// Every authenticated identity can browse the group catalog, e.g. to
/// pick one at registration review time or to look up a timetable.
#[utoipa::path(
    get,
    path = "/api/groups",
    tag = "groups",
    security(("BearerAuth" = [])),
    responses(
        (
            status = 200,
            description = "All groups, sorted by course then name",
            body = inline(SuccessResponse<Vec<GroupDto>>),
            example = json!({
                "success": true,
                "data": [
                    { "id": "0e2cda2a-91a8-4a07-b6da-80600dcdc1f8", "name": "CS-101", "course": 1 },
                    { "id": "7b8a2f90-3c41-44e5-9d2f-6f1f0a9b2c3d", "name": "CS-201", "course": 2 }
                ]
            })
        ),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    )
)]
#[get("/api/groups")]
pub async fn list_groups_handler(
    _user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.groups.list.execute().await {
        Ok(groups) => {
            ApiResponse::success(groups.into_iter().map(GroupDto::from).collect::<Vec<_>>())
        }

        Err(ListGroupsError::QueryFailed(ref e)) => {
            error!(error = %e, "Group listing failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::{Course, Role};
    use crate::group::application::ports::incoming::use_cases::ListGroupsUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::test_helpers::test_token_provider;
    use actix_web::{test, App};
    use async_trait::async_trait;

    struct MockTwoGroups;

    #[async_trait]
    impl ListGroupsUseCase for MockTwoGroups {
        async fn execute(&self) -> Result<Vec<Group>, ListGroupsError> {
            Ok(vec![
                Group {
                    id: Uuid::new_v4(),
                    name: "CS-101".to_string(),
                    course: Course::new(1).unwrap(),
                },
                Group {
                    id: Uuid::new_v4(),
                    name: "CS-201".to_string(),
                    course: Course::new(2).unwrap(),
                },
            ])
        }
    }

    #[actix_web::test]
    async fn any_signed_in_role_can_list_groups() {
        let app_state = TestAppStateBuilder::default()
            .with_list_groups(MockTwoGroups)
            .build();
        let provider = test_token_provider();
        let token = provider
            .generate_access_token(Uuid::new_v4(), Role::Student)
            .unwrap();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(provider))
                .service(list_groups_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/groups")
            .insert_header(("Authorization", format!("Bearer {token}")))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 2);
        assert_eq!(body["data"][0]["name"], "CS-101");
        assert_eq!(body["data"][1]["course"], 2);
    }

    #[actix_web::test]
    async fn listing_requires_a_token() {
        let app_state = TestAppStateBuilder::default().build();
        let provider = test_token_provider();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(provider))
                .service(list_groups_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/groups").to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);
    }
}
