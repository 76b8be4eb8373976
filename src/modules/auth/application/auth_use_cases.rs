use std::sync::Arc;

use crate::auth::application::ports::incoming::use_cases::{
    DeleteAccountUseCase, FetchProfileUseCase, ListPendingRegistrationsUseCase, LoginUserUseCase,
    LogoutUseCase, RefreshTokenUseCase, RegisterUserUseCase, RemoveProfilePhotoUseCase,
    ReviewRegistrationUseCase, UpdateProfilePhotoUseCase,
};

/// Bundle of auth and profile use cases injected into the web layer.
#[derive(Clone)]
pub struct AuthUseCases {
    pub register: Arc<dyn RegisterUserUseCase + Send + Sync>,
    pub login: Arc<dyn LoginUserUseCase + Send + Sync>,
    pub refresh: Arc<dyn RefreshTokenUseCase + Send + Sync>,
    pub logout: Arc<dyn LogoutUseCase + Send + Sync>,
    pub fetch_profile: Arc<dyn FetchProfileUseCase + Send + Sync>,
    pub update_photo: Arc<dyn UpdateProfilePhotoUseCase + Send + Sync>,
    pub remove_photo: Arc<dyn RemoveProfilePhotoUseCase + Send + Sync>,
    pub delete_account: Arc<dyn DeleteAccountUseCase + Send + Sync>,
    pub list_pending: Arc<dyn ListPendingRegistrationsUseCase + Send + Sync>,
    pub review: Arc<dyn ReviewRegistrationUseCase + Send + Sync>,
}

impl AuthUseCases {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        register: Arc<dyn RegisterUserUseCase + Send + Sync>,
        login: Arc<dyn LoginUserUseCase + Send + Sync>,
        refresh: Arc<dyn RefreshTokenUseCase + Send + Sync>,
        logout: Arc<dyn LogoutUseCase + Send + Sync>,
        fetch_profile: Arc<dyn FetchProfileUseCase + Send + Sync>,
        update_photo: Arc<dyn UpdateProfilePhotoUseCase + Send + Sync>,
        remove_photo: Arc<dyn RemoveProfilePhotoUseCase + Send + Sync>,
        delete_account: Arc<dyn DeleteAccountUseCase + Send + Sync>,
        list_pending: Arc<dyn ListPendingRegistrationsUseCase + Send + Sync>,
        review: Arc<dyn ReviewRegistrationUseCase + Send + Sync>,
    ) -> Self {
        Self {
            register,
            login,
            refresh,
            logout,
            fetch_profile,
            update_photo,
            remove_photo,
            delete_account,
            list_pending,
            review,
        }
    }
}
