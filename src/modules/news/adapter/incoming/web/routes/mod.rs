pub mod create_comment;
pub mod create_post;
pub mod delete_comment;
pub mod delete_post;
pub mod get_news_feed;
pub mod get_news_post;
pub mod toggle_like;
pub mod update_post;

pub use create_comment::create_comment_handler;
pub use create_post::create_post_handler;
pub use delete_comment::delete_comment_handler;
pub use delete_post::delete_post_handler;
pub use get_news_feed::get_news_feed_handler;
pub use get_news_post::get_news_post_handler;
pub use toggle_like::toggle_like_handler;
pub use update_post::update_post_handler;
