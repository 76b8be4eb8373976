mod create_subject_use_case;
mod delete_subject_use_case;
mod list_subjects_use_case;
mod update_subject_use_case;

pub use create_subject_use_case::{
    CreateSubjectCommand, CreateSubjectError, CreateSubjectUseCase, SubjectCommandError,
};
pub use delete_subject_use_case::{DeleteSubjectError, DeleteSubjectUseCase};
pub use list_subjects_use_case::{ListSubjectsError, ListSubjectsUseCase};
pub use update_subject_use_case::{UpdateSubjectCommand, UpdateSubjectError, UpdateSubjectUseCase};
