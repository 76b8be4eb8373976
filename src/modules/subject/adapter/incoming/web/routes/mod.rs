pub mod create_subject;
pub mod delete_subject;
pub mod list_subjects;
pub mod update_subject;

pub use create_subject::create_subject_handler;
pub use delete_subject::delete_subject_handler;
pub use list_subjects::list_subjects_handler;
pub use update_subject::update_subject_handler;
