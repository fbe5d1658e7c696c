use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use crate::error::{UserError, UserResult};

/// One-way password hashing
#[cfg_attr(test, mockall::automock)]
pub trait CredentialHasher: Send + Sync {
    /// Hash `plaintext` with a fresh salt
    fn hash(&self, plaintext: &str) -> UserResult<String>;

    /// Whether `plaintext` matches a hash produced by [`hash`](Self::hash)
    fn verify(&self, plaintext: &str, hash: &str) -> UserResult<bool>;
}

/// Argon2id with default parameters; output is a PHC string
#[derive(Debug, Clone, Default)]
pub struct Argon2Hasher {
    argon2: Argon2<'static>,
}

impl Argon2Hasher {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialHasher for Argon2Hasher {
    fn hash(&self, plaintext: &str) -> UserResult<String> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(plaintext.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| UserError::PasswordHash(e.to_string()))
    }

    fn verify(&self, plaintext: &str, hash: &str) -> UserResult<bool> {
        let parsed_hash =
            PasswordHash::new(hash).map_err(|e| UserError::PasswordHash(e.to_string()))?;

        Ok(self
            .argon2
            .verify_password(plaintext.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_not_plaintext_and_verifies() {
        let hasher = Argon2Hasher::new();
        let hash = hasher.hash("password1").unwrap();

        assert_ne!(hash, "password1");
        assert!(hash.starts_with("$argon2id$"));
        assert!(hasher.verify("password1", &hash).unwrap());
        assert!(!hasher.verify("password2", &hash).unwrap());
    }

    #[test]
    fn test_same_password_gets_different_salts() {
        let hasher = Argon2Hasher::new();
        assert_ne!(
            hasher.hash("password1").unwrap(),
            hasher.hash("password1").unwrap()
        );
    }

    #[test]
    fn test_malformed_hash_is_an_error() {
        let result = Argon2Hasher::new().verify("password1", "not-a-phc-string");
        assert!(matches!(result, Err(UserError::PasswordHash(_))));
    }
}
