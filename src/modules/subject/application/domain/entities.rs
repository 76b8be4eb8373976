use serde::Serialize;
use uuid::Uuid;

/// A taught subject. Who teaches it lives in an explicit association set
/// between subjects and teacher identities.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Subject {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubjectTeacher {
    pub id: Uuid,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubjectWithTeachers {
    pub id: Uuid,
    pub name: String,
    pub teachers: Vec<SubjectTeacher>,
}
