mod create_subject_service;
mod delete_subject_service;
mod list_subjects_service;
mod update_subject_service;

pub use create_subject_service::CreateSubjectService;
pub use delete_subject_service::DeleteSubjectService;
pub use list_subjects_service::ListSubjectsService;
pub use update_subject_service::UpdateSubjectService;
