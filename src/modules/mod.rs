pub mod admin;
pub mod auth;
pub mod group;
pub mod news;
pub mod schedule;
pub mod subject;
