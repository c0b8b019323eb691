//! # Attendance Models
//!
//! Records owned by the attendance system's setup tooling.
//!
//! Every person has one identity record ([`users::User`]) carrying their
//! credentials and [`users::UserRole`]. Each identity owns exactly one role
//! profile matching its role:
//!
//! ```text
//! users ──1:1── students     (role = STUDENT)
//!       ──1:1── teachers     (role = TEACHER)
//!       ──1:1── counsellors  (role = COUNSELLOR)
//! ```
//!
//! Profiles reference `users.id`, so an identity must be inserted (and its
//! generated id read back) before its profile can be written.

pub mod ids;
pub mod profiles;
pub mod users;

pub use ids::{CounsellorId, StudentId, TeacherId, UserId};
pub use profiles::{Counsellor, NewStaffProfile, NewStudent, Student, Teacher};
pub use users::{NewUser, UnknownRole, User, UserRole};
