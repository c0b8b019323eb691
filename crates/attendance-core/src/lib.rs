//! # Attendance Core
//!
//! Foundational types shared by the attendance setup tooling:
//!
//! - [`errors`]: the [`SetupError`] taxonomy every bootstrap step reports through
//! - [`password`]: one-way credential hashing for seeded accounts
//!
//! # Example
//!
//! ```ignore
//! use attendance_core::{hash_password_with_cost, verify_password};
//!
//! let hash = hash_password_with_cost("password123", 10)?;
//! assert!(verify_password("password123", &hash)?);
//! ```

pub mod errors;
pub mod password;

pub use errors::SetupError;
pub use password::{hash_password_with_cost, verify_password};
