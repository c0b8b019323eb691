//! Identity records and role tags.

use chrono::{DateTime, Utc};
use sqlx::{Database, Decode, Encode, FromRow, Type, postgres::PgTypeInfo};
use std::fmt;
use std::str::FromStr;

use crate::ids::UserId;

/// Role tag carried by every identity record.
///
/// Stored as upper-case text (`STUDENT`, `TEACHER`, `COUNSELLOR`); the
/// `users.role` column has a CHECK constraint over the same values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UserRole {
    Student,
    Teacher,
    Counsellor,
}

impl UserRole {
    pub const ALL: [UserRole; 3] = [UserRole::Student, UserRole::Teacher, UserRole::Counsellor];

    pub const fn as_str(self) -> &'static str {
        match self {
            UserRole::Student => "STUDENT",
            UserRole::Teacher => "TEACHER",
            UserRole::Counsellor => "COUNSELLOR",
        }
    }

    /// Human-readable label for operator output.
    pub const fn label(self) -> &'static str {
        match self {
            UserRole::Student => "Student",
            UserRole::Teacher => "Teacher",
            UserRole::Counsellor => "Counsellor",
        }
    }

    /// Table holding this role's profile records.
    pub const fn profile_table(self) -> &'static str {
        match self {
            UserRole::Student => "students",
            UserRole::Teacher => "teachers",
            UserRole::Counsellor => "counsellors",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown user role: {0:?}")]
pub struct UnknownRole(pub String);

impl FromStr for UserRole {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "STUDENT" => Ok(UserRole::Student),
            "TEACHER" => Ok(UserRole::Teacher),
            "COUNSELLOR" => Ok(UserRole::Counsellor),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

impl Type<sqlx::Postgres> for UserRole {
    fn type_info() -> PgTypeInfo {
        <&str as Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &PgTypeInfo) -> bool {
        <&str as Type<sqlx::Postgres>>::compatible(ty)
    }
}

impl<'q> Encode<'q, sqlx::Postgres> for UserRole {
    fn encode_by_ref(
        &self,
        buf: &mut <sqlx::Postgres as Database>::ArgumentBuffer<'q>,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <&str as Encode<'q, sqlx::Postgres>>::encode_by_ref(&self.as_str(), buf)
    }
}

impl<'r> Decode<'r, sqlx::Postgres> for UserRole {
    fn decode(
        value: <sqlx::Postgres as Database>::ValueRef<'r>,
    ) -> Result<Self, sqlx::error::BoxDynError> {
        let raw = <&str as Decode<'r, sqlx::Postgres>>::decode(value)?;
        Ok(raw.parse()?)
    }
}

/// A stored identity record.
///
/// `password` holds the bcrypt hash, never the plaintext.
#[derive(FromRow, Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

/// Identity record staged for insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub full_name: String,
    pub role: UserRole,
}
