//! # Password hashing and verification
//!
//! The two functions behind the join-waitlist and login paths:
//!
//! - [`hash_password`] — salts via [`OsRng`] and hashes with the default
//!   Argon2id parameters, producing a PHC-format string (stored in the
//!   `password_hash` column of `users`).
//! - [`verify_password`] — parses a stored PHC string and checks a candidate
//!   plaintext against it. `Ok(false)` means wrong password; `Err` means the
//!   stored hash is malformed.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

/// Hash a password using Argon2id. Returns a PHC-format string.
pub fn hash_password(password: &str) -> Result<String, String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| format!("Failed to hash password: {}", e))?;
    Ok(hash.to_string())
}

/// Verify a password against a PHC-format hash string.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, String> {
    let parsed_hash =
        PasswordHash::new(hash).map_err(|e| format!("Invalid password hash: {}", e))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify_roundtrip() {
        let hash = hash_password("brushes-and-oils").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("brushes-and-oils", &hash).unwrap());
        assert!(!verify_password("wrong-password", &hash).unwrap());
    }

    #[test]
    fn malformed_hash_is_an_error() {
        assert!(verify_password("anything", "not-a-phc-string").is_err());
    }
}
