//! Error taxonomy for bootstrap and reset operations.
//!
//! Every failure a setup step can hit maps onto one [`SetupError`] variant.
//! None of them are retried: callers bubble them to the top-level command,
//! which reports and exits non-zero. A declined reset is not an error and
//! never appears here.

use std::path::PathBuf;

/// Failure raised by any bootstrap, seeding, provisioning or reset step.
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    /// Required configuration is missing or malformed.
    #[error("configuration error: {0}")]
    Config(String),

    /// The store could not be reached.
    #[error("failed to connect to database: {0}")]
    Connection(#[source] sqlx::Error),

    /// Creating or dropping schema objects failed.
    #[error("schema operation failed: {0}")]
    Schema(#[source] sqlx::Error),

    /// A unique constraint rejected an insert.
    #[error("integrity violation on {}: {message}", .constraint.as_deref().unwrap_or("unknown constraint"))]
    Integrity {
        constraint: Option<String>,
        message: String,
    },

    /// Any other storage failure.
    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),

    #[error("failed to hash password: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),

    /// A required directory could not be created.
    #[error("failed to create directory {}: {source}", .path.display())]
    Directory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading the operator's confirmation failed.
    #[error("failed to read confirmation: {0}")]
    Prompt(String),
}

impl SetupError {
    /// Classifies a storage error, separating unique violations from the rest.
    pub fn from_db(err: sqlx::Error) -> Self {
        if let Some(db_err) = err.as_database_error() {
            if db_err.is_unique_violation() {
                return Self::Integrity {
                    constraint: db_err.constraint().map(str::to_owned),
                    message: db_err.message().to_owned(),
                };
            }
        }
        Self::Database(err)
    }

    pub fn is_integrity_violation(&self) -> bool {
        matches!(self, Self::Integrity { .. })
    }
}

impl From<sqlx::Error> for SetupError {
    fn from(err: sqlx::Error) -> Self {
        Self::from_db(err)
    }
}
