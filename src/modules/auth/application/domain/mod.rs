pub mod entities;
pub mod photo_policy;
