use serde::Serialize;
use uuid::Uuid;

use crate::auth::application::domain::entities::Course;

/// A class group. The (name, course) pair is unique; students join a
/// group at registration and schedule slots are scoped to one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Group {
    pub id: Uuid,
    pub name: String,
    pub course: Course,
}
