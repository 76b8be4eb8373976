pub mod modules;
pub use modules::admin;
pub use modules::auth;
pub use modules::group;
pub use modules::news;
pub use modules::schedule;
pub use modules::subject;
pub mod api;
pub mod health;
pub mod shared;

// Test helpers module - only compiled with feature flag
#[cfg(feature = "test-helpers")]
mod test_helpers;

use crate::admin::adapter::outgoing::DashboardQueryPostgres;
use crate::admin::application::admin_use_cases::AdminUseCases;
use crate::admin::application::services::GetDashboardService;
use crate::api::openapi::ApiDoc;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::{
    ImageStoreFs, RedisTokenRepository, UserQueryPostgres, UserRepositoryPostgres,
};
use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::services::{
    DeleteAccountService, FetchProfileService, ListPendingRegistrationsService, LoginUserService,
    LogoutService, RefreshTokenService, RegisterUserService, RemoveProfilePhotoService,
    ReviewRegistrationService, UpdateProfilePhotoService,
};
use crate::group::adapter::outgoing::{GroupQueryPostgres, GroupRepositoryPostgres};
use crate::group::application::group_use_cases::GroupUseCases;
use crate::group::application::services::{
    CreateGroupService, DeleteGroupService, ListGroupsService, UpdateGroupService,
};
use crate::news::adapter::outgoing::{NewsQueryPostgres, NewsRepositoryPostgres};
use crate::news::application::news_use_cases::NewsUseCases;
use crate::news::application::services::{
    CreateCommentService, CreatePostService, DeleteCommentService, DeletePostService,
    GetNewsFeedService, GetNewsPostService, ToggleLikeService, UpdatePostService,
};
use crate::schedule::adapter::outgoing::{ScheduleQueryPostgres, ScheduleRepositoryPostgres};
use crate::schedule::application::schedule_use_cases::ScheduleUseCases;
use crate::schedule::application::services::{
    CreateSlotService, DeleteSlotService, GetScheduleService, UpdateSlotService,
};
use crate::subject::adapter::outgoing::{SubjectQueryPostgres, SubjectRepositoryPostgres};
use crate::subject::application::services::{
    CreateSubjectService, DeleteSubjectService, ListSubjectsService, UpdateSubjectService,
};
use crate::subject::application::subject_use_cases::SubjectUseCases;

use actix_web::{web, App, HttpServer};
use deadpool_redis::{Config, Runtime};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthUseCases,
    pub groups: GroupUseCases,
    pub subjects: SubjectUseCases,
    pub schedule: ScheduleUseCases,
    pub news: NewsUseCases,
    pub admin: AdminUseCases,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    use crate::auth::{
        adapter::outgoing::security::Argon2Hasher,
        application::ports::outgoing::token_provider::TokenProvider,
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // 🚨 SAFETY GUARD: Prevent test-helpers in production
    #[cfg(feature = "test-helpers")]
    {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        if env == "production" {
            panic!("🚨 FATAL: test-helpers feature enabled in production environment!");
        }
        tracing::warn!(
            "⚠️  Test helper routes are ENABLED for environment: {}",
            env
        );
    }
    // Environment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    // Load Env. variables
    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");
    let redis_url = env::var("REDIS_URL").expect("REDIS_URL is not set in .env file");

    let server_url = format!("{host}:{port}");
    println!("Server run on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    let db_arc = Arc::new(conn);

    Migrator::up(db_arc.as_ref(), None)
        .await
        .expect("Failed to run database migrations");

    // Redis connection
    let redis_pool = Config::from_url(&redis_url)
        .create_pool(Some(Runtime::Tokio1))
        .expect("Failed to create Redis pool");

    let redis_arc = Arc::new(redis_pool);

    // Outgoing adapters
    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));
    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));
    let group_repo = GroupRepositoryPostgres::new(Arc::clone(&db_arc));
    let group_query = GroupQueryPostgres::new(Arc::clone(&db_arc));
    let subject_repo = SubjectRepositoryPostgres::new(Arc::clone(&db_arc));
    let subject_query = SubjectQueryPostgres::new(Arc::clone(&db_arc));
    let schedule_repo = ScheduleRepositoryPostgres::new(Arc::clone(&db_arc));
    let schedule_query = ScheduleQueryPostgres::new(Arc::clone(&db_arc));
    let news_repo = NewsRepositoryPostgres::new(Arc::clone(&db_arc));
    let news_query = NewsQueryPostgres::new(Arc::clone(&db_arc));
    let dashboard_query = DashboardQueryPostgres::new(Arc::clone(&db_arc));
    let redis_token_repo = RedisTokenRepository::new(Arc::clone(&redis_arc));
    let image_store = ImageStoreFs::from_env();

    let jwt_service = JwtTokenService::new(JwtConfig::from_env());
    let password_hasher = Argon2Hasher::from_env();

    // Auth and profile
    let register = RegisterUserService::new(user_repo.clone(), password_hasher.clone());
    let login = LoginUserService::new(
        user_query.clone(),
        password_hasher,
        Arc::new(jwt_service.clone()),
    );
    let refresh = RefreshTokenService::new(redis_token_repo.clone(), Arc::new(jwt_service.clone()));
    let logout = LogoutService::new(redis_token_repo.clone(), Arc::new(jwt_service.clone()));
    let fetch_profile = FetchProfileService::new(
        user_query.clone(),
        news_query.clone(),
        schedule_query.clone(),
    );
    let update_photo = UpdateProfilePhotoService::new(user_repo.clone(), image_store.clone());
    let remove_photo = RemoveProfilePhotoService::new(user_repo.clone(), image_store.clone());
    let delete_account = DeleteAccountService::new(user_repo.clone(), image_store, redis_token_repo);
    let list_pending = ListPendingRegistrationsService::new(user_query.clone());
    let review = ReviewRegistrationService::new(user_repo, user_query.clone());

    let auth_use_cases = AuthUseCases::new(
        Arc::new(register),
        Arc::new(login),
        Arc::new(refresh),
        Arc::new(logout),
        Arc::new(fetch_profile),
        Arc::new(update_photo),
        Arc::new(remove_photo),
        Arc::new(delete_account),
        Arc::new(list_pending),
        Arc::new(review),
    );

    // Group catalog
    let group_use_cases = GroupUseCases::new(
        Arc::new(ListGroupsService::new(group_query)),
        Arc::new(CreateGroupService::new(group_repo.clone())),
        Arc::new(UpdateGroupService::new(group_repo.clone())),
        Arc::new(DeleteGroupService::new(group_repo)),
    );

    // Subject catalog
    let subject_use_cases = SubjectUseCases::new(
        Arc::new(ListSubjectsService::new(subject_query)),
        Arc::new(CreateSubjectService::new(subject_repo.clone())),
        Arc::new(UpdateSubjectService::new(subject_repo.clone())),
        Arc::new(DeleteSubjectService::new(subject_repo)),
    );

    // Weekly schedule. One service answers both group and teacher reads.
    let get_schedule = Arc::new(GetScheduleService::new(schedule_query));
    let schedule_use_cases = ScheduleUseCases::new(
        get_schedule.clone(),
        get_schedule,
        Arc::new(CreateSlotService::new(schedule_repo.clone())),
        Arc::new(UpdateSlotService::new(schedule_repo.clone())),
        Arc::new(DeleteSlotService::new(schedule_repo)),
    );

    // News board
    let news_use_cases = NewsUseCases::new(
        Arc::new(GetNewsFeedService::new(news_query.clone())),
        Arc::new(GetNewsPostService::new(news_query.clone())),
        Arc::new(CreatePostService::new(news_repo.clone())),
        Arc::new(UpdatePostService::new(news_query.clone(), news_repo.clone())),
        Arc::new(DeletePostService::new(news_query.clone(), news_repo.clone())),
        Arc::new(ToggleLikeService::new(news_repo.clone())),
        Arc::new(CreateCommentService::new(news_repo.clone())),
        Arc::new(DeleteCommentService::new(news_query, news_repo)),
    );

    // Admin dashboard
    let admin_use_cases = AdminUseCases::new(Arc::new(GetDashboardService::new(
        dashboard_query,
        user_query,
    )));

    let state = AppState {
        auth: auth_use_cases,
        groups: group_use_cases,
        subjects: subject_use_cases,
        schedule: schedule_use_cases,
        news: news_use_cases,
        admin: admin_use_cases,
    };

    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);
    // Clone db_arc for use in HttpServer closure
    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        let mut app = App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(web::Data::new(Arc::clone(&redis_arc)))
            .app_data(web::PayloadConfig::new(8 * 1024 * 1024))
            .app_data(crate::shared::api::custom_json_config())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            .configure(init_routes);

        // Conditionally add test routes
        #[cfg(feature = "test-helpers")]
        {
            app = app.configure(test_helpers::configure_routes);
        }

        app
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth + profile
    cfg.service(crate::auth::adapter::incoming::web::routes::register_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::login_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::refresh_token_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::logout_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::fetch_profile_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::update_profile_photo_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::remove_profile_photo_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::delete_account_handler);
    // Registration review
    cfg.service(crate::auth::adapter::incoming::web::routes::list_pending_registrations_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::review_registration_handler);
    // Groups
    cfg.service(crate::group::adapter::incoming::web::routes::list_groups_handler);
    cfg.service(crate::group::adapter::incoming::web::routes::create_group_handler);
    cfg.service(crate::group::adapter::incoming::web::routes::update_group_handler);
    cfg.service(crate::group::adapter::incoming::web::routes::delete_group_handler);
    // Subjects
    cfg.service(crate::subject::adapter::incoming::web::routes::list_subjects_handler);
    cfg.service(crate::subject::adapter::incoming::web::routes::create_subject_handler);
    cfg.service(crate::subject::adapter::incoming::web::routes::update_subject_handler);
    cfg.service(crate::subject::adapter::incoming::web::routes::delete_subject_handler);
    // Schedule
    cfg.service(crate::schedule::adapter::incoming::web::routes::get_schedule_handler);
    cfg.service(crate::schedule::adapter::incoming::web::routes::create_slot_handler);
    cfg.service(crate::schedule::adapter::incoming::web::routes::update_slot_handler);
    cfg.service(crate::schedule::adapter::incoming::web::routes::delete_slot_handler);
    // News
    cfg.service(crate::news::adapter::incoming::web::routes::get_news_feed_handler);
    cfg.service(crate::news::adapter::incoming::web::routes::get_news_post_handler);
    cfg.service(crate::news::adapter::incoming::web::routes::create_post_handler);
    cfg.service(crate::news::adapter::incoming::web::routes::update_post_handler);
    cfg.service(crate::news::adapter::incoming::web::routes::delete_post_handler);
    cfg.service(crate::news::adapter::incoming::web::routes::toggle_like_handler);
    cfg.service(crate::news::adapter::incoming::web::routes::create_comment_handler);
    cfg.service(crate::news::adapter::incoming::web::routes::delete_comment_handler);
    // Admin dashboard
    cfg.service(crate::admin::adapter::incoming::web::routes::get_dashboard_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
