use std::sync::Arc;

use actix_web::web;

use crate::admin::application::admin_use_cases::AdminUseCases;
use crate::admin::application::ports::incoming::use_cases::GetDashboardUseCase;
use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::ports::incoming::use_cases::{
    DeleteAccountUseCase, FetchProfileUseCase, ListPendingRegistrationsUseCase, LoginUserUseCase,
    LogoutUseCase, RefreshTokenUseCase, RegisterUserUseCase, RemoveProfilePhotoUseCase,
    ReviewRegistrationUseCase, UpdateProfilePhotoUseCase,
};
use crate::group::application::group_use_cases::GroupUseCases;
use crate::group::application::ports::incoming::use_cases::{
    CreateGroupUseCase, DeleteGroupUseCase, ListGroupsUseCase, UpdateGroupUseCase,
};
use crate::news::application::news_use_cases::NewsUseCases;
use crate::news::application::ports::incoming::use_cases::{
    CreateCommentUseCase, CreatePostUseCase, DeleteCommentUseCase, DeletePostUseCase,
    GetNewsFeedUseCase, GetNewsPostUseCase, ToggleLikeUseCase, UpdatePostUseCase,
};
use crate::schedule::application::ports::incoming::use_cases::{
    CreateSlotUseCase, DeleteSlotUseCase, GetGroupScheduleUseCase, GetTeacherScheduleUseCase,
    UpdateSlotUseCase,
};
use crate::schedule::application::schedule_use_cases::ScheduleUseCases;
use crate::subject::application::ports::incoming::use_cases::{
    CreateSubjectUseCase, DeleteSubjectUseCase, ListSubjectsUseCase, UpdateSubjectUseCase,
};
use crate::subject::application::subject_use_cases::SubjectUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;

/// Builds an AppState where every use case is a stub; tests swap in the
/// one or two mocks the handler under test actually calls.
pub struct TestAppStateBuilder {
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
    list_groups: Arc<dyn ListGroupsUseCase + Send + Sync>,
    create_group: Arc<dyn CreateGroupUseCase + Send + Sync>,
    update_group: Arc<dyn UpdateGroupUseCase + Send + Sync>,
    delete_group: Arc<dyn DeleteGroupUseCase + Send + Sync>,
    list_subjects: Arc<dyn ListSubjectsUseCase + Send + Sync>,
    create_subject: Arc<dyn CreateSubjectUseCase + Send + Sync>,
    update_subject: Arc<dyn UpdateSubjectUseCase + Send + Sync>,
    delete_subject: Arc<dyn DeleteSubjectUseCase + Send + Sync>,
    group_schedule: Arc<dyn GetGroupScheduleUseCase + Send + Sync>,
    teacher_schedule: Arc<dyn GetTeacherScheduleUseCase + Send + Sync>,
    create_slot: Arc<dyn CreateSlotUseCase + Send + Sync>,
    update_slot: Arc<dyn UpdateSlotUseCase + Send + Sync>,
    delete_slot: Arc<dyn DeleteSlotUseCase + Send + Sync>,
    news_feed: Arc<dyn GetNewsFeedUseCase + Send + Sync>,
    news_detail: Arc<dyn GetNewsPostUseCase + Send + Sync>,
    create_post: Arc<dyn CreatePostUseCase + Send + Sync>,
    update_post: Arc<dyn UpdatePostUseCase + Send + Sync>,
    delete_post: Arc<dyn DeletePostUseCase + Send + Sync>,
    toggle_like: Arc<dyn ToggleLikeUseCase + Send + Sync>,
    create_comment: Arc<dyn CreateCommentUseCase + Send + Sync>,
    delete_comment: Arc<dyn DeleteCommentUseCase + Send + Sync>,
    dashboard: Arc<dyn GetDashboardUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            register: Arc::new(StubRegisterUserUseCase),
            login: Arc::new(StubLoginUserUseCase),
            refresh: Arc::new(StubRefreshTokenUseCase),
            logout: Arc::new(StubLogoutUseCase),
            fetch_profile: Arc::new(StubFetchProfileUseCase),
            update_photo: Arc::new(StubUpdateProfilePhotoUseCase),
            remove_photo: Arc::new(StubRemoveProfilePhotoUseCase),
            delete_account: Arc::new(StubDeleteAccountUseCase),
            list_pending: Arc::new(StubListPendingRegistrationsUseCase),
            review: Arc::new(StubReviewRegistrationUseCase),
            list_groups: Arc::new(StubListGroupsUseCase),
            create_group: Arc::new(StubCreateGroupUseCase),
            update_group: Arc::new(StubUpdateGroupUseCase),
            delete_group: Arc::new(StubDeleteGroupUseCase),
            list_subjects: Arc::new(StubListSubjectsUseCase),
            create_subject: Arc::new(StubCreateSubjectUseCase),
            update_subject: Arc::new(StubUpdateSubjectUseCase),
            delete_subject: Arc::new(StubDeleteSubjectUseCase),
            group_schedule: Arc::new(StubGetGroupScheduleUseCase),
            teacher_schedule: Arc::new(StubGetTeacherScheduleUseCase),
            create_slot: Arc::new(StubCreateSlotUseCase),
            update_slot: Arc::new(StubUpdateSlotUseCase),
            delete_slot: Arc::new(StubDeleteSlotUseCase),
            news_feed: Arc::new(StubGetNewsFeedUseCase),
            news_detail: Arc::new(StubGetNewsPostUseCase),
            create_post: Arc::new(StubCreatePostUseCase),
            update_post: Arc::new(StubUpdatePostUseCase),
            delete_post: Arc::new(StubDeletePostUseCase),
            toggle_like: Arc::new(StubToggleLikeUseCase),
            create_comment: Arc::new(StubCreateCommentUseCase),
            delete_comment: Arc::new(StubDeleteCommentUseCase),
            dashboard: Arc::new(StubGetDashboardUseCase),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_register(mut self, uc: impl RegisterUserUseCase + Send + Sync + 'static) -> Self {
        self.register = Arc::new(uc);
        self
    }

    pub fn with_login(mut self, uc: impl LoginUserUseCase + Send + Sync + 'static) -> Self {
        self.login = Arc::new(uc);
        self
    }

    pub fn with_refresh(mut self, uc: impl RefreshTokenUseCase + Send + Sync + 'static) -> Self {
        self.refresh = Arc::new(uc);
        self
    }

    pub fn with_logout(mut self, uc: impl LogoutUseCase + Send + Sync + 'static) -> Self {
        self.logout = Arc::new(uc);
        self
    }

    pub fn with_fetch_profile(
        mut self,
        uc: impl FetchProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.fetch_profile = Arc::new(uc);
        self
    }

    pub fn with_update_photo(
        mut self,
        uc: impl UpdateProfilePhotoUseCase + Send + Sync + 'static,
    ) -> Self {
        self.update_photo = Arc::new(uc);
        self
    }

    pub fn with_remove_photo(
        mut self,
        uc: impl RemoveProfilePhotoUseCase + Send + Sync + 'static,
    ) -> Self {
        self.remove_photo = Arc::new(uc);
        self
    }

    pub fn with_delete_account(
        mut self,
        uc: impl DeleteAccountUseCase + Send + Sync + 'static,
    ) -> Self {
        self.delete_account = Arc::new(uc);
        self
    }

    pub fn with_list_pending(
        mut self,
        uc: impl ListPendingRegistrationsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.list_pending = Arc::new(uc);
        self
    }

    pub fn with_review(mut self, uc: impl ReviewRegistrationUseCase + Send + Sync + 'static) -> Self {
        self.review = Arc::new(uc);
        self
    }

    pub fn with_list_groups(mut self, uc: impl ListGroupsUseCase + Send + Sync + 'static) -> Self {
        self.list_groups = Arc::new(uc);
        self
    }

    pub fn with_create_group(mut self, uc: impl CreateGroupUseCase + Send + Sync + 'static) -> Self {
        self.create_group = Arc::new(uc);
        self
    }

    pub fn with_update_group(mut self, uc: impl UpdateGroupUseCase + Send + Sync + 'static) -> Self {
        self.update_group = Arc::new(uc);
        self
    }

    pub fn with_delete_group(mut self, uc: impl DeleteGroupUseCase + Send + Sync + 'static) -> Self {
        self.delete_group = Arc::new(uc);
        self
    }

    pub fn with_list_subjects(
        mut self,
        uc: impl ListSubjectsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.list_subjects = Arc::new(uc);
        self
    }

    pub fn with_create_subject(
        mut self,
        uc: impl CreateSubjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.create_subject = Arc::new(uc);
        self
    }

    pub fn with_update_subject(
        mut self,
        uc: impl UpdateSubjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.update_subject = Arc::new(uc);
        self
    }

    pub fn with_delete_subject(
        mut self,
        uc: impl DeleteSubjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.delete_subject = Arc::new(uc);
        self
    }

    pub fn with_group_schedule(
        mut self,
        uc: impl GetGroupScheduleUseCase + Send + Sync + 'static,
    ) -> Self {
        self.group_schedule = Arc::new(uc);
        self
    }

    pub fn with_teacher_schedule(
        mut self,
        uc: impl GetTeacherScheduleUseCase + Send + Sync + 'static,
    ) -> Self {
        self.teacher_schedule = Arc::new(uc);
        self
    }

    pub fn with_create_slot(mut self, uc: impl CreateSlotUseCase + Send + Sync + 'static) -> Self {
        self.create_slot = Arc::new(uc);
        self
    }

    pub fn with_update_slot(mut self, uc: impl UpdateSlotUseCase + Send + Sync + 'static) -> Self {
        self.update_slot = Arc::new(uc);
        self
    }

    pub fn with_delete_slot(mut self, uc: impl DeleteSlotUseCase + Send + Sync + 'static) -> Self {
        self.delete_slot = Arc::new(uc);
        self
    }

    pub fn with_news_feed(mut self, uc: impl GetNewsFeedUseCase + Send + Sync + 'static) -> Self {
        self.news_feed = Arc::new(uc);
        self
    }

    pub fn with_news_detail(mut self, uc: impl GetNewsPostUseCase + Send + Sync + 'static) -> Self {
        self.news_detail = Arc::new(uc);
        self
    }

    pub fn with_create_post(mut self, uc: impl CreatePostUseCase + Send + Sync + 'static) -> Self {
        self.create_post = Arc::new(uc);
        self
    }

    pub fn with_update_post(mut self, uc: impl UpdatePostUseCase + Send + Sync + 'static) -> Self {
        self.update_post = Arc::new(uc);
        self
    }

    pub fn with_delete_post(mut self, uc: impl DeletePostUseCase + Send + Sync + 'static) -> Self {
        self.delete_post = Arc::new(uc);
        self
    }

    pub fn with_toggle_like(mut self, uc: impl ToggleLikeUseCase + Send + Sync + 'static) -> Self {
        self.toggle_like = Arc::new(uc);
        self
    }

    pub fn with_create_comment(
        mut self,
        uc: impl CreateCommentUseCase + Send + Sync + 'static,
    ) -> Self {
        self.create_comment = Arc::new(uc);
        self
    }

    pub fn with_delete_comment(
        mut self,
        uc: impl DeleteCommentUseCase + Send + Sync + 'static,
    ) -> Self {
        self.delete_comment = Arc::new(uc);
        self
    }

    pub fn with_dashboard(mut self, uc: impl GetDashboardUseCase + Send + Sync + 'static) -> Self {
        self.dashboard = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            auth: AuthUseCases {
                register: self.register,
                login: self.login,
                refresh: self.refresh,
                logout: self.logout,
                fetch_profile: self.fetch_profile,
                update_photo: self.update_photo,
                remove_photo: self.remove_photo,
                delete_account: self.delete_account,
                list_pending: self.list_pending,
                review: self.review,
            },
            groups: GroupUseCases {
                list: self.list_groups,
                create: self.create_group,
                update: self.update_group,
                delete: self.delete_group,
            },
            subjects: SubjectUseCases {
                list: self.list_subjects,
                create: self.create_subject,
                update: self.update_subject,
                delete: self.delete_subject,
            },
            schedule: ScheduleUseCases {
                get_group: self.group_schedule,
                get_teacher: self.teacher_schedule,
                create: self.create_slot,
                update: self.update_slot,
                delete: self.delete_slot,
            },
            news: NewsUseCases {
                feed: self.news_feed,
                detail: self.news_detail,
                create_post: self.create_post,
                update_post: self.update_post,
                delete_post: self.delete_post,
                toggle_like: self.toggle_like,
                create_comment: self.create_comment,
                delete_comment: self.delete_comment,
            },
            admin: AdminUseCases {
                dashboard: self.dashboard,
            },
        })
    }
}
