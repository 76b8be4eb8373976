mod delete_account_service;
mod fetch_profile_service;
mod list_pending_registrations_service;
mod login_user_service;
mod logout_service;
mod refresh_token_service;
mod register_user_service;
mod remove_profile_photo_service;
mod review_registration_service;
mod update_profile_photo_service;

pub use delete_account_service::DeleteAccountService;
pub use fetch_profile_service::FetchProfileService;
pub use list_pending_registrations_service::ListPendingRegistrationsService;
pub use login_user_service::LoginUserService;
pub use logout_service::LogoutService;
pub use refresh_token_service::RefreshTokenService;
pub use register_user_service::RegisterUserService;
pub use remove_profile_photo_service::RemoveProfilePhotoService;
pub use review_registration_service::ReviewRegistrationService;
pub use update_profile_photo_service::UpdateProfilePhotoService;
