mod create_comment_use_case;
mod create_post_use_case;
mod delete_comment_use_case;
mod delete_post_use_case;
mod get_news_feed_use_case;
mod get_news_post_use_case;
mod toggle_like_use_case;
mod update_post_use_case;

pub use create_comment_use_case::{
    CommentCommandError, CreateCommentCommand, CreateCommentError, CreateCommentUseCase,
};
pub use create_post_use_case::{
    CreatePostCommand, CreatePostError, CreatePostUseCase, PostCommandError,
};
pub use delete_comment_use_case::{DeleteCommentError, DeleteCommentUseCase};
pub use delete_post_use_case::{DeletePostError, DeletePostUseCase};
pub use get_news_feed_use_case::{GetNewsFeedError, GetNewsFeedUseCase};
pub use get_news_post_use_case::{GetNewsPostError, GetNewsPostUseCase};
pub use toggle_like_use_case::{ToggleLikeError, ToggleLikeUseCase};
pub use update_post_use_case::{UpdatePostCommand, UpdatePostError, UpdatePostUseCase};
