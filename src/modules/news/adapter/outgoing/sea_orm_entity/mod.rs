pub mod news_comments;
pub mod news_likes;
pub mod news_posts;
