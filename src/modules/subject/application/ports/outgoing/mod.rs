mod subject_query;
mod subject_repository;

pub use subject_query::{SubjectQuery, SubjectQueryError};
pub use subject_repository::{
    CreateSubjectData, SubjectRepository, SubjectRepositoryError, UpdateSubjectData,
};
