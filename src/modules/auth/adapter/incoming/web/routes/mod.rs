pub mod delete_account;
pub mod fetch_profile;
pub mod list_pending_registrations;
pub mod login_user;
pub mod logout_user;
pub mod refresh_token;
pub mod register_user;
pub mod remove_profile_photo;
pub mod review_registration;
pub mod update_profile_photo;

pub use delete_account::delete_account_handler;
pub use fetch_profile::fetch_profile_handler;
pub use list_pending_registrations::list_pending_registrations_handler;
pub use login_user::login_user_handler;
pub use logout_user::logout_user_handler;
pub use refresh_token::refresh_token_handler;
pub use register_user::register_user_handler;
pub use remove_profile_photo::remove_profile_photo_handler;
pub use review_registration::review_registration_handler;
pub use update_profile_photo::update_profile_photo_handler;
