//! Fixed baseline accounts written by the seeder.
//!
//! The data is deterministic so operators can log in immediately after
//! setup with the credentials printed in the summary.

use attendance_models::{NewStaffProfile, NewStudent, NewUser, UserId, UserRole};

/// Plaintext password shared by every seeded account.
pub const SEED_PASSWORD: &str = "password123";

/// Role-specific half of a baseline account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedProfile {
    Student(NewStudent),
    Teacher(NewStaffProfile),
    Counsellor(NewStaffProfile),
}

impl SeedProfile {
    pub fn role(&self) -> UserRole {
        match self {
            SeedProfile::Student(_) => UserRole::Student,
            SeedProfile::Teacher(_) => UserRole::Teacher,
            SeedProfile::Counsellor(_) => UserRole::Counsellor,
        }
    }
}

/// One identity plus the profile it owns.
///
/// The identity's role is taken from the profile, so the two cannot disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaselineSeed {
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub profile: SeedProfile,
}

impl BaselineSeed {
    pub fn role(&self) -> UserRole {
        self.profile.role()
    }

    pub fn to_new_user(&self, password_hash: String) -> NewUser {
        NewUser {
            username: self.username.clone(),
            email: self.email.clone(),
            password_hash,
            full_name: self.full_name.clone(),
            role: self.role(),
        }
    }
}

/// An account the seeder created in this run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededAccount {
    pub user_id: UserId,
    pub username: String,
    pub role: UserRole,
}

/// What a seeding run did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub created: Vec<SeededAccount>,
    /// Baseline usernames that were already present and left untouched.
    pub existing: Vec<String>,
}

impl SeedReport {
    /// True when every baseline account was already present.
    pub fn already_seeded(&self) -> bool {
        self.created.is_empty()
    }

    /// Some baseline accounts existed and the rest were created.
    pub fn repaired(&self) -> bool {
        !self.created.is_empty() && !self.existing.is_empty()
    }
}

/// Baseline accounts in insertion order: student, teacher, counsellor.
pub fn baseline_seeds() -> Vec<BaselineSeed> {
    vec![
        BaselineSeed {
            username: "student1".to_string(),
            email: "student1@example.com".to_string(),
            full_name: "John Doe".to_string(),
            profile: SeedProfile::Student(NewStudent {
                roll_number: "STU001".to_string(),
                registration_number: "REG001".to_string(),
                course: "B.Tech".to_string(),
                semester: 1,
                branch: "CSE".to_string(),
                phone: Some("9876543210".to_string()),
                face_registered: false,
            }),
        },
        BaselineSeed {
            username: "teacher1".to_string(),
            email: "teacher1@example.com".to_string(),
            full_name: "Dr. Jane Smith".to_string(),
            profile: SeedProfile::Teacher(NewStaffProfile {
                employee_id: "EMP001".to_string(),
                department: "Computer Science".to_string(),
                phone: Some("9876543210".to_string()),
            }),
        },
        BaselineSeed {
            username: "counsellor1".to_string(),
            email: "counsellor1@example.com".to_string(),
            full_name: "Mr. Robert Brown".to_string(),
            profile: SeedProfile::Counsellor(NewStaffProfile {
                employee_id: "EMP002".to_string(),
                department: "Student Affairs".to_string(),
                phone: Some("9876543210".to_string()),
            }),
        },
    ]
}
