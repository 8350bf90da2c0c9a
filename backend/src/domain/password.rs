//! Salted password digests for the sign-in collaborator.

use std::fmt;

use sha2::{Digest, Sha256};

const SALT_BYTES: usize = 16;

/// Salted SHA-256 digest of a member password.
///
/// # Examples
/// ```
/// use backend::domain::PasswordDigest;
///
/// let digest = PasswordDigest::derive("password");
/// assert!(digest.verify("password"));
/// assert!(!digest.verify("Password"));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordDigest {
    salt: [u8; SALT_BYTES],
    hash: [u8; 32],
}

impl PasswordDigest {
    /// Digest `password` under a fresh random salt.
    #[must_use]
    pub fn derive(password: &str) -> Self {
        Self::with_salt(rand::random(), password)
    }

    /// Digest `password` under a caller-chosen salt.
    #[must_use]
    pub fn with_salt(salt: [u8; SALT_BYTES], password: &str) -> Self {
        Self {
            salt,
            hash: digest(&salt, password),
        }
    }

    /// Whether `candidate` matches the stored digest.
    #[must_use]
    pub fn verify(&self, candidate: &str) -> bool {
        let computed = digest(&self.salt, candidate);
        computed
            .iter()
            .zip(self.hash.iter())
            .fold(0_u8, |acc, (left, right)| acc | (left ^ right))
            == 0
    }
}

impl fmt::Debug for PasswordDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordDigest")
            .field("salt", &hex::encode(self.salt))
            .field("hash", &"<redacted>")
            .finish()
    }
}

fn digest(salt: &[u8], password: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(salt);
    hasher.update(password.as_bytes());
    hasher.finalize().into()
}
