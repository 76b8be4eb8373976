pub mod subjects;
pub mod teacher_subjects;
