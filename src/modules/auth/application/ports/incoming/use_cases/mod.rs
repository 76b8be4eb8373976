mod delete_account_use_case;
mod fetch_profile_use_case;
mod list_pending_registrations_use_case;
mod login_user_use_case;
mod logout_use_case;
mod refresh_token_use_case;
mod register_user_use_case;
mod remove_profile_photo_use_case;
mod review_registration_use_case;
mod update_profile_photo_use_case;

pub use delete_account_use_case::{DeleteAccountError, DeleteAccountUseCase};
pub use fetch_profile_use_case::{
    FetchProfileError, FetchProfileUseCase, ProfilePost, ProfileSlot, UserProfile,
};
pub use list_pending_registrations_use_case::{
    ListPendingRegistrationsError, ListPendingRegistrationsUseCase,
};
pub use login_user_use_case::{
    LoggedInUser, LoginCommand, LoginCommandError, LoginError, LoginResult, LoginUserUseCase,
};
pub use logout_use_case::{LogoutCommand, LogoutCommandError, LogoutError, LogoutUseCase};
pub use refresh_token_use_case::{RefreshTokenError, RefreshTokenUseCase, TokenPair};
pub use register_user_use_case::{
    RegisterUserCommand, RegisterUserCommandError, RegisterUserError, RegisterUserUseCase,
};
pub use remove_profile_photo_use_case::{RemoveProfilePhotoError, RemoveProfilePhotoUseCase};
pub use review_registration_use_case::{
    ReviewRegistrationCommand, ReviewRegistrationError, ReviewRegistrationUseCase,
};
pub use update_profile_photo_use_case::{
    UpdateProfilePhotoCommand, UpdateProfilePhotoError, UpdateProfilePhotoUseCase, UpdatedPhoto,
};
