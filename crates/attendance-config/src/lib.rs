//! Configuration for the attendance setup tooling.
//!
//! Everything is read from environment variables, usually after
//! `dotenvy::dotenv()` has loaded a `.env` file. Each section has a
//! `from_lookup` constructor taking an arbitrary key lookup so parsing can
//! be exercised without mutating the process environment.
//!
//! # Modules
//!
//! - [`database`]: connection string and pool sizing
//! - [`storage`]: directories the application expects on disk
//!
//! # Environment Variables
//!
//! | Variable | Default |
//! |----------|---------|
//! | `DATABASE_URL` | required |
//! | `DATABASE_MAX_CONNECTIONS` | `5` |
//! | `DATABASE_CONNECT_TIMEOUT_SECS` | `10` |
//! | `UPLOAD_FOLDER` | `uploads` |
//! | `FACE_STORAGE_DIR` | `student_faces` |
//! | `BCRYPT_COST` | `12` |

pub mod database;
pub mod storage;

pub use database::DatabaseConfig;
pub use storage::StorageConfig;

use attendance_core::SetupError;
use std::str::FromStr;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SetupConfig {
    pub database: DatabaseConfig,
    pub storage: StorageConfig,
    /// bcrypt cost used when hashing seeded credentials.
    pub bcrypt_cost: u32,
}

impl SetupConfig {
    pub fn from_env() -> Result<Self, SetupError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, SetupError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bcrypt_cost = parse_or(&lookup, "BCRYPT_COST", bcrypt::DEFAULT_COST)?;
        if !(4..=31).contains(&bcrypt_cost) {
            return Err(SetupError::Config(format!(
                "BCRYPT_COST must be between 4 and 31, got {bcrypt_cost}"
            )));
        }

        Ok(Self {
            database: DatabaseConfig::from_lookup(&lookup)?,
            storage: StorageConfig::from_lookup(&lookup),
            bcrypt_cost,
        })
    }
}

/// Parses `key` when present, falling back to `default` when absent.
/// A present but unparseable value is an error.
pub(crate) fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, SetupError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| SetupError::Config(format!("{key} has an invalid value: {raw:?}"))),
        None => Ok(default),
    }
}
