//! Password transformer - one-way hashing applied when a password is written.
//!
//! The write half (`to_stored`) salts and hashes the plaintext with Argon2id
//! at a configurable work factor. The read half (`from_stored`) is the
//! identity: stored hashes are returned verbatim, never re-hashed.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};

use crate::config::MIN_PASSWORD_HASH_COST;
use crate::errors::{AppError, AppResult};

/// Transformation pair invoked by the persistence mapping layer on the
/// `password` column.
#[derive(Clone)]
pub struct PasswordTransformer {
    params: Params,
}

impl std::fmt::Debug for PasswordTransformer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordTransformer")
            .field("cost", &self.cost())
            .finish()
    }
}

impl PasswordTransformer {
    /// Build a transformer with the given work factor (Argon2 iterations).
    ///
    /// # Errors
    /// Returns an internal error if the cost is below the minimum.
    pub fn new(cost: u32) -> AppResult<Self> {
        if cost < MIN_PASSWORD_HASH_COST {
            return Err(AppError::internal(format!(
                "Password hash cost must be at least {}",
                MIN_PASSWORD_HASH_COST
            )));
        }

        let params = Params::new(
            Params::DEFAULT_M_COST,
            cost,
            Params::DEFAULT_P_COST,
            None,
        )
        .map_err(|e| AppError::internal(format!("Invalid hash parameters: {}", e)))?;

        Ok(Self { params })
    }

    /// Work factor this transformer hashes with.
    pub fn cost(&self) -> u32 {
        self.params.t_cost()
    }

    /// Hash a plaintext password for storage. Every call uses a fresh salt.
    pub fn to_stored(&self, plain_text: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2()
            .hash_password(plain_text.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Password hash failed: {}", e)))?;
        Ok(hash.to_string())
    }

    /// Read half of the pair: the stored hash, unchanged.
    #[inline]
    pub fn from_stored(stored: String) -> String {
        stored
    }

    /// Check a plaintext password against a stored hash.
    ///
    /// The cost is read from the hash itself, so hashes written with a
    /// different work factor still verify.
    pub fn verify(&self, plain_text: &str, stored: &str) -> bool {
        PasswordHash::new(stored)
            .map(|parsed| {
                self.argon2()
                    .verify_password(plain_text.as_bytes(), &parsed)
                    .is_ok()
            })
            .unwrap_or(false)
    }

    #[inline]
    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }
}
