pub mod conflict;
pub mod entities;
