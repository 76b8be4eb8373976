use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

// Auth + profile
use crate::auth::adapter::incoming::web::routes::fetch_profile::{
    ProfilePostDto, ProfileResponseDto, ProfileSlotDto,
};
use crate::auth::adapter::incoming::web::routes::login_user::{
    LoginRequestDto, LoginResponseDto, LoginUserInfo,
};
use crate::auth::adapter::incoming::web::routes::register_user::{
    RegisterRequestDto, RegisteredUserResponse,
};
use crate::auth::adapter::incoming::web::routes::review_registration::{
    ReviewRequestDto, ReviewedUserResponse,
};
// Catalogs, schedule, news
use crate::group::adapter::incoming::web::routes::list_groups::GroupDto;
use crate::news::adapter::incoming::web::routes::get_news_feed::PostSummaryDto;
use crate::schedule::adapter::incoming::web::routes::get_schedule::ScheduleSlotDto;
use crate::subject::adapter::incoming::web::routes::list_subjects::{
    SubjectDto, SubjectTeacherDto,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Campus Portal API",
        version = "1.0.0",
        description = "API documentation for the campus schedule and news portal",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::register_user::register_user_handler,
        crate::auth::adapter::incoming::web::routes::login_user::login_user_handler,
        crate::auth::adapter::incoming::web::routes::fetch_profile::fetch_profile_handler,

        // Admin review queue
        crate::auth::adapter::incoming::web::routes::review_registration::review_registration_handler,

        // Catalogs
        crate::group::adapter::incoming::web::routes::list_groups::list_groups_handler,
        crate::subject::adapter::incoming::web::routes::list_subjects::list_subjects_handler,

        // Schedule + news reads
        crate::schedule::adapter::incoming::web::routes::get_schedule::get_schedule_handler,
        crate::news::adapter::incoming::web::routes::get_news_feed::get_news_feed_handler,

        // Remaining write endpoints are documented in the routes themselves;
        // they follow the same envelope and error codes as the ones above.
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<RegisteredUserResponse>,
            ErrorResponse,
            ErrorDetail,

            // Auth DTOs
            RegisterRequestDto,
            RegisteredUserResponse,
            LoginRequestDto,
            LoginResponseDto,
            LoginUserInfo,
            ProfileResponseDto,
            ProfilePostDto,
            ProfileSlotDto,
            ReviewRequestDto,
            ReviewedUserResponse,

            // Catalog, schedule and news DTOs
            GroupDto,
            SubjectDto,
            SubjectTeacherDto,
            ScheduleSlotDto,
            PostSummaryDto
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Registration and session endpoints"),
        (name = "profile", description = "Profile and account endpoints"),
        (name = "admin", description = "Admin review and dashboard endpoints"),
        (name = "groups", description = "Student group catalog"),
        (name = "subjects", description = "Subject catalog"),
        (name = "schedule", description = "Weekly timetable endpoints"),
        (name = "news", description = "News board endpoints"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Enter your JWT token"))
                        .build(),
                ),
            )
        }
    }
}
