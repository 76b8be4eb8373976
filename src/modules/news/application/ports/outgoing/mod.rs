mod news_query;
mod news_repository;

pub use news_query::{NewsQuery, NewsQueryError};
pub use news_repository::{
    CreateCommentData, CreatePostData, NewsRepository, NewsRepositoryError, UpdatePostData,
};
