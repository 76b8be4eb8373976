use actix_web::{delete, web, Responder};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::news::application::ports::incoming::use_cases::DeleteCommentError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/news/{id}/comments/{comment_id}")]
pub async fn delete_comment_handler(
    user: AuthenticatedUser,
    path: web::Path<(Uuid, Uuid)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (post_id, comment_id) = path.into_inner();

    info!(post_id = %post_id, comment_id = %comment_id, "Comment deletion");

    match data
        .news
        .delete_comment
        .execute(post_id, comment_id, user.user_id, user.role)
        .await
    {
        Ok(()) => ApiResponse::<()>::no_content(),

        Err(DeleteCommentError::CommentNotFound) => {
            ApiResponse::not_found("COMMENT_NOT_FOUND", "Comment not found")
        }

        Err(DeleteCommentError::Forbidden) => {
            warn!(comment_id = %comment_id, caller_id = %user.user_id, "Comment deletion refused");
            ApiResponse::forbidden(
                "FORBIDDEN",
                "Only the comment author, the post author or an admin may delete this comment",
            )
        }

        Err(DeleteCommentError::RepositoryError(ref e)) => {
            error!(error = %e, "Comment deletion failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::Role;
    use crate::news::application::ports::incoming::use_cases::DeleteCommentUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::test_helpers::test_token_provider;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    struct RecordingDelete {
        seen: Arc<Mutex<Option<(Uuid, Uuid)>>>,
    }

    #[async_trait]
    impl DeleteCommentUseCase for RecordingDelete {
        async fn execute(
            &self,
            post_id: Uuid,
            comment_id: Uuid,
            _caller_id: Uuid,
            _caller_role: Role,
        ) -> Result<(), DeleteCommentError> {
            *self.seen.lock().unwrap() = Some((post_id, comment_id));
            Ok(())
        }
    }

    struct MockForbidden;

    #[async_trait]
    impl DeleteCommentUseCase for MockForbidden {
        async fn execute(
            &self,
            _post_id: Uuid,
            _comment_id: Uuid,
            _caller_id: Uuid,
            _caller_role: Role,
        ) -> Result<(), DeleteCommentError> {
            Err(DeleteCommentError::Forbidden)
        }
    }

    async fn remove_comment(
        app_state: actix_web::web::Data<crate::AppState>,
        post_id: Uuid,
        comment_id: Uuid,
    ) -> actix_web::dev::ServiceResponse {
        let provider = test_token_provider();
        let token = provider
            .generate_access_token(Uuid::new_v4(), Role::Student)
            .unwrap();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(provider))
                .service(delete_comment_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/news/{post_id}/comments/{comment_id}"))
            .insert_header(("Authorization", format!("Bearer {token}")))
            .to_request();

        test::call_service(&app, req).await
    }

    #[actix_web::test]
    async fn deletion_is_scoped_to_the_post_in_the_path() {
        let seen = Arc::new(Mutex::new(None));
        let app_state = TestAppStateBuilder::default()
            .with_delete_comment(RecordingDelete { seen: seen.clone() })
            .build();
        let post_id = Uuid::new_v4();
        let comment_id = Uuid::new_v4();

        let resp = remove_comment(app_state, post_id, comment_id).await;
        assert_eq!(resp.status(), 204);
        assert_eq!(*seen.lock().unwrap(), Some((post_id, comment_id)));
    }

    #[actix_web::test]
    async fn a_bystander_cannot_delete_the_comment() {
        let app_state = TestAppStateBuilder::default()
            .with_delete_comment(MockForbidden)
            .build();

        let resp = remove_comment(app_state, Uuid::new_v4(), Uuid::new_v4()).await;
        assert_eq!(resp.status(), 403);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "FORBIDDEN");
    }
}
