use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(Uuid);

impl UserId {
    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for UserId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<UserId> for Uuid {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Teacher,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Teacher => "teacher",
            Role::Admin => "admin",
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown role: {0}")]
pub struct ParseRoleError(pub String);

impl std::str::FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(Role::Student),
            "teacher" => Ok(Role::Teacher),
            "admin" => Ok(Role::Admin),
            other => Err(ParseRoleError(other.to_string())),
        }
    }
}

/// Course year a student group belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Course(i16);

#[derive(Debug, Clone, thiserror::Error)]
#[error("Course must be between 1 and 4, got {0}")]
pub struct InvalidCourse(pub i16);

impl Course {
    pub fn new(value: i16) -> Result<Self, InvalidCourse> {
        if (1..=4).contains(&value) {
            Ok(Self(value))
        } else {
            Err(InvalidCourse(value))
        }
    }

    pub fn value(&self) -> i16 {
        self.0
    }
}

/// Role plus the data that only exists for that role. A teacher's subjects
/// live in the teacher_subjects association, not here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum RoleAssignment {
    Student { group_id: Uuid, course: Course },
    Teacher,
    Admin,
}

impl RoleAssignment {
    pub fn role(&self) -> Role {
        match self {
            RoleAssignment::Student { .. } => Role::Student,
            RoleAssignment::Teacher => Role::Teacher,
            RoleAssignment::Admin => Role::Admin,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
}

impl ApprovalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApprovalStatus::Pending => "pending",
            ApprovalStatus::Approved => "approved",
            ApprovalStatus::Rejected => "rejected",
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown approval status: {0}")]
pub struct ParseStatusError(pub String);

impl std::str::FromStr for ApprovalStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ApprovalStatus::Pending),
            "approved" => Ok(ApprovalStatus::Approved),
            "rejected" => Ok(ApprovalStatus::Rejected),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewDecision {
    Approved,
    Rejected,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum StatusTransitionError {
    #[error("Registration was already {0:?}")]
    AlreadyReviewed(ApprovalStatus),
}

impl ApprovalStatus {
    /// The only legal transitions are pending -> approved and
    /// pending -> rejected, triggered by an admin review.
    pub fn review(self, decision: ReviewDecision) -> Result<ApprovalStatus, StatusTransitionError> {
        match self {
            ApprovalStatus::Pending => Ok(match decision {
                ReviewDecision::Approved => ApprovalStatus::Approved,
                ReviewDecision::Rejected => ApprovalStatus::Rejected,
            }),
            reviewed => Err(StatusTransitionError::AlreadyReviewed(reviewed)),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub status: ApprovalStatus,
    #[serde(flatten)]
    pub assignment: RoleAssignment,
    pub photo_file: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn role(&self) -> Role {
        self.assignment.role()
    }
}
