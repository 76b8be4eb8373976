use std::sync::Arc;

use crate::news::application::ports::incoming::use_cases::{
    CreateCommentUseCase, CreatePostUseCase, DeleteCommentUseCase, DeletePostUseCase,
    GetNewsFeedUseCase, GetNewsPostUseCase, ToggleLikeUseCase, UpdatePostUseCase,
};

/// Bundle of news use cases injected into the web layer.
#[derive(Clone)]
pub struct NewsUseCases {
    pub feed: Arc<dyn GetNewsFeedUseCase + Send + Sync>,
    pub detail: Arc<dyn GetNewsPostUseCase + Send + Sync>,
    pub create_post: Arc<dyn CreatePostUseCase + Send + Sync>,
    pub update_post: Arc<dyn UpdatePostUseCase + Send + Sync>,
    pub delete_post: Arc<dyn DeletePostUseCase + Send + Sync>,
    pub toggle_like: Arc<dyn ToggleLikeUseCase + Send + Sync>,
    pub create_comment: Arc<dyn CreateCommentUseCase + Send + Sync>,
    pub delete_comment: Arc<dyn DeleteCommentUseCase + Send + Sync>,
}

impl NewsUseCases {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        feed: Arc<dyn GetNewsFeedUseCase + Send + Sync>,
        detail: Arc<dyn GetNewsPostUseCase + Send + Sync>,
        create_post: Arc<dyn CreatePostUseCase + Send + Sync>,
        update_post: Arc<dyn UpdatePostUseCase + Send + Sync>,
        delete_post: Arc<dyn DeletePostUseCase + Send + Sync>,
        toggle_like: Arc<dyn ToggleLikeUseCase + Send + Sync>,
        create_comment: Arc<dyn CreateCommentUseCase + Send + Sync>,
        delete_comment: Arc<dyn DeleteCommentUseCase + Send + Sync>,
    ) -> Self {
        Self {
            feed,
            detail,
            create_post,
            update_post,
            delete_post,
            toggle_like,
            create_comment,
            delete_comment,
        }
    }
}
