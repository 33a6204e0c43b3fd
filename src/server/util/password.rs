//! Argon2 password hashing.

use argon2::{
    password_hash::{
        rand_core::OsRng, Error as PasswordHashError, PasswordHash, PasswordHasher,
        PasswordVerifier, SaltString,
    },
    Argon2,
};

use crate::server::error::{internal::InternalError, AppError};

/// Hashes a plaintext password into a PHC string using a random salt.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(InternalError::PasswordHash)?;

    Ok(hash.to_string())
}

/// Checks a plaintext password against a stored PHC string.
///
/// # Returns
/// - `Ok(true)` - Password matches
/// - `Ok(false)` - Password does not match, or the stored hash is not a valid PHC string
/// - `Err(AppError::InternalErr)` - Verification failed for another reason
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, AppError> {
    let Ok(parsed) = PasswordHash::new(password_hash) else {
        return Ok(false);
    };

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(PasswordHashError::Password) => Ok(false),
        Err(err) => Err(InternalError::PasswordHash(err).into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verifies_hashed_password() {
        let hash = hash_password("correct horse").unwrap();

        assert!(verify_password("correct horse", &hash).unwrap());
        assert!(!verify_password("battery staple", &hash).unwrap());
    }

    #[test]
    fn rejects_malformed_hash() {
        assert!(!verify_password("anything", "not-a-phc-string").unwrap());
    }
}
