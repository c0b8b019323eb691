//! Role profile records.
//!
//! Each profile belongs to exactly one identity through `user_id`, and only
//! to an identity whose role matches the profile kind.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::ids::{CounsellorId, StudentId, TeacherId, UserId};

#[derive(FromRow, Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub id: StudentId,
    pub user_id: UserId,
    pub roll_number: String,
    pub registration_number: String,
    pub course: String,
    pub semester: i32,
    pub branch: String,
    pub phone: Option<String>,
    /// Set once the student's face has been enrolled for attendance.
    pub face_registered: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(FromRow, Debug, Clone, PartialEq, Eq)]
pub struct Teacher {
    pub id: TeacherId,
    pub user_id: UserId,
    pub employee_id: String,
    pub department: String,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(FromRow, Debug, Clone, PartialEq, Eq)]
pub struct Counsellor {
    pub id: CounsellorId,
    pub user_id: UserId,
    pub employee_id: String,
    pub department: String,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Student profile staged for insertion. The owning `user_id` is supplied
/// at insert time, once the identity row exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub roll_number: String,
    pub registration_number: String,
    pub course: String,
    pub semester: i32,
    pub branch: String,
    pub phone: Option<String>,
    pub face_registered: bool,
}

/// Teacher and counsellor profiles share a shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStaffProfile {
    pub employee_id: String,
    pub department: String,
    pub phone: Option<String>,
}
