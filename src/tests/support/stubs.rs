use async_trait::async_trait;
use uuid::Uuid;

use crate::admin::application::domain::entities::Dashboard;
use crate::admin::application::ports::incoming::use_cases::{GetDashboardError, GetDashboardUseCase};
use crate::auth::application::domain::entities::{Course, Role, User};
use crate::auth::application::ports::incoming::use_cases::{
    DeleteAccountError, DeleteAccountUseCase, FetchProfileError, FetchProfileUseCase,
    ListPendingRegistrationsError, ListPendingRegistrationsUseCase, LoginCommand, LoginError,
    LoginResult, LoginUserUseCase, LogoutCommand, LogoutError, LogoutUseCase, RefreshTokenError,
    RefreshTokenUseCase, RegisterUserCommand, RegisterUserError, RegisterUserUseCase,
    RemoveProfilePhotoError, RemoveProfilePhotoUseCase, ReviewRegistrationCommand,
    ReviewRegistrationError, ReviewRegistrationUseCase, TokenPair, UpdateProfilePhotoCommand,
    UpdateProfilePhotoError, UpdateProfilePhotoUseCase, UpdatedPhoto, UserProfile,
};
use crate::group::application::domain::entities::Group;
use crate::group::application::ports::incoming::use_cases::{
    CreateGroupCommand, CreateGroupError, CreateGroupUseCase, DeleteGroupError, DeleteGroupUseCase,
    ListGroupsError, ListGroupsUseCase, UpdateGroupCommand, UpdateGroupError, UpdateGroupUseCase,
};
use crate::news::application::domain::entities::{
    Comment, LikeStatus, NewsPost, PostDetail, PostSummary,
};
use crate::news::application::ports::incoming::use_cases::{
    CreateCommentCommand, CreateCommentError, CreateCommentUseCase, CreatePostCommand,
    CreatePostError, CreatePostUseCase, DeleteCommentError, DeleteCommentUseCase, DeletePostError,
    DeletePostUseCase, GetNewsFeedError, GetNewsFeedUseCase, GetNewsPostError, GetNewsPostUseCase,
    ToggleLikeError, ToggleLikeUseCase, UpdatePostCommand, UpdatePostError, UpdatePostUseCase,
};
use crate::schedule::application::domain::entities::{ScheduleSlot, SlotView};
use crate::schedule::application::ports::incoming::use_cases::{
    CreateSlotCommand, CreateSlotError, CreateSlotUseCase, DeleteSlotError, DeleteSlotUseCase,
    GetGroupScheduleUseCase, GetScheduleError, GetTeacherScheduleUseCase, UpdateSlotCommand,
    UpdateSlotError, UpdateSlotUseCase,
};
use crate::subject::application::domain::entities::{Subject, SubjectWithTeachers};
use crate::subject::application::ports::incoming::use_cases::{
    CreateSubjectCommand, CreateSubjectError, CreateSubjectUseCase, DeleteSubjectError,
    DeleteSubjectUseCase, ListSubjectsError, ListSubjectsUseCase, UpdateSubjectCommand,
    UpdateSubjectError, UpdateSubjectUseCase,
};

//
// ──────────────────────────────────────────────────────────
// Auth stubs
// ──────────────────────────────────────────────────────────
//

#[derive(Default, Clone)]
pub struct StubRegisterUserUseCase;

#[async_trait]
impl RegisterUserUseCase for StubRegisterUserUseCase {
    async fn execute(&self, _command: RegisterUserCommand) -> Result<User, RegisterUserError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubLoginUserUseCase;

#[async_trait]
impl LoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, _command: LoginCommand) -> Result<LoginResult, LoginError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubRefreshTokenUseCase;

#[async_trait]
impl RefreshTokenUseCase for StubRefreshTokenUseCase {
    async fn execute(&self, _refresh_token: &str) -> Result<TokenPair, RefreshTokenError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubLogoutUseCase;

#[async_trait]
impl LogoutUseCase for StubLogoutUseCase {
    async fn execute(&self, _command: LogoutCommand) -> Result<(), LogoutError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubFetchProfileUseCase;

#[async_trait]
impl FetchProfileUseCase for StubFetchProfileUseCase {
    async fn execute(&self, _user_id: Uuid) -> Result<UserProfile, FetchProfileError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateProfilePhotoUseCase;

#[async_trait]
impl UpdateProfilePhotoUseCase for StubUpdateProfilePhotoUseCase {
    async fn execute(
        &self,
        _command: UpdateProfilePhotoCommand,
    ) -> Result<UpdatedPhoto, UpdateProfilePhotoError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubRemoveProfilePhotoUseCase;

#[async_trait]
impl RemoveProfilePhotoUseCase for StubRemoveProfilePhotoUseCase {
    async fn execute(&self, _user_id: Uuid) -> Result<(), RemoveProfilePhotoError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteAccountUseCase;

#[async_trait]
impl DeleteAccountUseCase for StubDeleteAccountUseCase {
    async fn execute(&self, _user_id: Uuid) -> Result<(), DeleteAccountError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListPendingRegistrationsUseCase;

#[async_trait]
impl ListPendingRegistrationsUseCase for StubListPendingRegistrationsUseCase {
    async fn execute(&self) -> Result<Vec<User>, ListPendingRegistrationsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubReviewRegistrationUseCase;

#[async_trait]
impl ReviewRegistrationUseCase for StubReviewRegistrationUseCase {
    async fn execute(
        &self,
        _command: ReviewRegistrationCommand,
    ) -> Result<User, ReviewRegistrationError> {
        unimplemented!("Not used in this test")
    }
}

//
// ──────────────────────────────────────────────────────────
// Group stubs
// ──────────────────────────────────────────────────────────
//

#[derive(Default, Clone)]
pub struct StubListGroupsUseCase;

#[async_trait]
impl ListGroupsUseCase for StubListGroupsUseCase {
    async fn execute(&self) -> Result<Vec<Group>, ListGroupsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubCreateGroupUseCase;

#[async_trait]
impl CreateGroupUseCase for StubCreateGroupUseCase {
    async fn execute(&self, _command: CreateGroupCommand) -> Result<Group, CreateGroupError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateGroupUseCase;

#[async_trait]
impl UpdateGroupUseCase for StubUpdateGroupUseCase {
    async fn execute(&self, _command: UpdateGroupCommand) -> Result<Group, UpdateGroupError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteGroupUseCase;

#[async_trait]
impl DeleteGroupUseCase for StubDeleteGroupUseCase {
    async fn execute(&self, _group_id: Uuid) -> Result<(), DeleteGroupError> {
        unimplemented!("Not used in this test")
    }
}

//
// ──────────────────────────────────────────────────────────
// Subject stubs
// ──────────────────────────────────────────────────────────
//

#[derive(Default, Clone)]
pub struct StubListSubjectsUseCase;

#[async_trait]
impl ListSubjectsUseCase for StubListSubjectsUseCase {
    async fn execute(&self) -> Result<Vec<SubjectWithTeachers>, ListSubjectsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubCreateSubjectUseCase;

#[async_trait]
impl CreateSubjectUseCase for StubCreateSubjectUseCase {
    async fn execute(
        &self,
        _command: CreateSubjectCommand,
    ) -> Result<Subject, CreateSubjectError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateSubjectUseCase;

#[async_trait]
impl UpdateSubjectUseCase for StubUpdateSubjectUseCase {
    async fn execute(
        &self,
        _command: UpdateSubjectCommand,
    ) -> Result<Subject, UpdateSubjectError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteSubjectUseCase;

#[async_trait]
impl DeleteSubjectUseCase for StubDeleteSubjectUseCase {
    async fn execute(&self, _subject_id: Uuid) -> Result<(), DeleteSubjectError> {
        unimplemented!("Not used in this test")
    }
}

//
// ──────────────────────────────────────────────────────────
// Schedule stubs
// ──────────────────────────────────────────────────────────
//

#[derive(Default, Clone)]
pub struct StubGetGroupScheduleUseCase;

#[async_trait]
impl GetGroupScheduleUseCase for StubGetGroupScheduleUseCase {
    async fn execute(
        &self,
        _group_id: Uuid,
        _course: Course,
    ) -> Result<Vec<SlotView>, GetScheduleError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetTeacherScheduleUseCase;

#[async_trait]
impl GetTeacherScheduleUseCase for StubGetTeacherScheduleUseCase {
    async fn execute(&self, _teacher_id: Uuid) -> Result<Vec<SlotView>, GetScheduleError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubCreateSlotUseCase;

#[async_trait]
impl CreateSlotUseCase for StubCreateSlotUseCase {
    async fn execute(&self, _command: CreateSlotCommand) -> Result<ScheduleSlot, CreateSlotError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateSlotUseCase;

#[async_trait]
impl UpdateSlotUseCase for StubUpdateSlotUseCase {
    async fn execute(&self, _command: UpdateSlotCommand) -> Result<ScheduleSlot, UpdateSlotError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteSlotUseCase;

#[async_trait]
impl DeleteSlotUseCase for StubDeleteSlotUseCase {
    async fn execute(&self, _slot_id: Uuid) -> Result<(), DeleteSlotError> {
        unimplemented!("Not used in this test")
    }
}

//
// ──────────────────────────────────────────────────────────
// News stubs
// ──────────────────────────────────────────────────────────
//

#[derive(Default, Clone)]
pub struct StubGetNewsFeedUseCase;

#[async_trait]
impl GetNewsFeedUseCase for StubGetNewsFeedUseCase {
    async fn execute(&self, _caller_id: Uuid) -> Result<Vec<PostSummary>, GetNewsFeedError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetNewsPostUseCase;

#[async_trait]
impl GetNewsPostUseCase for StubGetNewsPostUseCase {
    async fn execute(
        &self,
        _post_id: Uuid,
        _caller_id: Uuid,
    ) -> Result<PostDetail, GetNewsPostError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubCreatePostUseCase;

#[async_trait]
impl CreatePostUseCase for StubCreatePostUseCase {
    async fn execute(&self, _command: CreatePostCommand) -> Result<NewsPost, CreatePostError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUpdatePostUseCase;

#[async_trait]
impl UpdatePostUseCase for StubUpdatePostUseCase {
    async fn execute(&self, _command: UpdatePostCommand) -> Result<NewsPost, UpdatePostError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeletePostUseCase;

#[async_trait]
impl DeletePostUseCase for StubDeletePostUseCase {
    async fn execute(
        &self,
        _post_id: Uuid,
        _caller_id: Uuid,
        _caller_role: Role,
    ) -> Result<(), DeletePostError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubToggleLikeUseCase;

#[async_trait]
impl ToggleLikeUseCase for StubToggleLikeUseCase {
    async fn execute(&self, _post_id: Uuid, _user_id: Uuid) -> Result<LikeStatus, ToggleLikeError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubCreateCommentUseCase;

#[async_trait]
impl CreateCommentUseCase for StubCreateCommentUseCase {
    async fn execute(&self, _command: CreateCommentCommand) -> Result<Comment, CreateCommentError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteCommentUseCase;

#[async_trait]
impl DeleteCommentUseCase for StubDeleteCommentUseCase {
    async fn execute(
        &self,
        _post_id: Uuid,
        _comment_id: Uuid,
        _caller_id: Uuid,
        _caller_role: Role,
    ) -> Result<(), DeleteCommentError> {
        unimplemented!("Not used in this test")
    }
}

//
// ──────────────────────────────────────────────────────────
// Admin stubs
// ──────────────────────────────────────────────────────────
//

#[derive(Default, Clone)]
pub struct StubGetDashboardUseCase;

#[async_trait]
impl GetDashboardUseCase for StubGetDashboardUseCase {
    async fn execute(&self) -> Result<Dashboard, GetDashboardError> {
        unimplemented!("Not used in this test")
    }
}
