use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::{
    domain::entities::RoleAssignment,
    ports::incoming::use_cases::{
        FetchProfileError, FetchProfileUseCase, ProfilePost, ProfileSlot, UserProfile,
    },
    ports::outgoing::UserQuery,
};
use crate::news::application::ports::outgoing::NewsQuery;
use crate::schedule::application::domain::entities::SlotView;
use crate::schedule::application::ports::outgoing::ScheduleQuery;

/// Profile aggregation: the identity row, the user's own posts and the
/// slice of the timetable that concerns them.
#[derive(Debug, Clone)]
pub struct FetchProfileService<U, N, S>
where
    U: UserQuery + Send + Sync,
    N: NewsQuery + Send + Sync,
    S: ScheduleQuery + Send + Sync,
{
    user_query: U,
    news_query: N,
    schedule_query: S,
}

impl<U, N, S> FetchProfileService<U, N, S>
where
    U: UserQuery + Send + Sync,
    N: NewsQuery + Send + Sync,
    S: ScheduleQuery + Send + Sync,
{
    pub fn new(user_query: U, news_query: N, schedule_query: S) -> Self {
        Self {
            user_query,
            news_query,
            schedule_query,
        }
    }
}

fn to_profile_slot(view: SlotView) -> ProfileSlot {
    ProfileSlot {
        id: view.id,
        weekday: view.weekday.value(),
        start_time: view.start_time,
        end_time: view.end_time,
        subject_name: view.subject_name,
        group_name: view.group_name,
        teacher_name: view.teacher_name,
    }
}

#[async_trait]
impl<U, N, S> FetchProfileUseCase for FetchProfileService<U, N, S>
where
    U: UserQuery + Send + Sync,
    N: NewsQuery + Send + Sync,
    S: ScheduleQuery + Send + Sync,
{
    async fn execute(&self, user_id: Uuid) -> Result<UserProfile, FetchProfileError> {
        let user = self
            .user_query
            .find_by_id(user_id)
            .await
            .map_err(|e| FetchProfileError::RepositoryError(e.to_string()))?
            .ok_or(FetchProfileError::UserNotFound)?;

        let posts = self
            .news_query
            .list_author_posts(user_id)
            .await
            .map_err(|e| FetchProfileError::RepositoryError(e.to_string()))?
            .into_iter()
            .map(|p| ProfilePost {
                id: p.id,
                title: p.title,
                created_at: p.created_at,
                like_count: p.like_count,
                comment_count: p.comment_count,
            })
            .collect();

        let slots = match user.assignment {
            RoleAssignment::Student { group_id, course } => self
                .schedule_query
                .list_group_slots(group_id, course)
                .await
                .map_err(|e| FetchProfileError::RepositoryError(e.to_string()))?,
            RoleAssignment::Teacher => self
                .schedule_query
                .list_teacher_slots(user_id)
                .await
                .map_err(|e| FetchProfileError::RepositoryError(e.to_string()))?,
            RoleAssignment::Admin => Vec::new(),
        };

        Ok(UserProfile {
            user,
            posts,
            schedule: slots.into_iter().map(to_profile_slot).collect(),
        })
    }
}
