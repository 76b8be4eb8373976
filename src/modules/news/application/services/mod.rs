mod create_comment_service;
mod create_post_service;
mod delete_comment_service;
mod delete_post_service;
mod get_news_feed_service;
mod get_news_post_service;
mod toggle_like_service;
mod update_post_service;

pub use create_comment_service::CreateCommentService;
pub use create_post_service::CreatePostService;
pub use delete_comment_service::DeleteCommentService;
pub use delete_post_service::DeletePostService;
pub use get_news_feed_service::GetNewsFeedService;
pub use get_news_post_service::GetNewsPostService;
pub use toggle_like_service::ToggleLikeService;
pub use update_post_service::UpdatePostService;
