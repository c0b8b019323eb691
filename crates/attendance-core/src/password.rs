use bcrypt::{hash, verify};

use crate::errors::SetupError;

/// Hashes with an explicit bcrypt cost. Seeding reads the cost from config.
pub fn hash_password_with_cost(password: &str, cost: u32) -> Result<String, SetupError> {
    Ok(hash(password, cost)?)
}

pub fn verify_password(password: &str, hash: &str) -> Result<bool, SetupError> {
    Ok(verify(password, hash)?)
}
