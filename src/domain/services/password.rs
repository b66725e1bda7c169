//! Password hashing.
//!
//! Passwords are stored as the lowercase hex MD5 digest of the plaintext.
//! The digest is deterministic and unsalted so a stored hash can be compared
//! directly with the hash of a submitted password.

use md5::{Digest, Md5};

/// Initial password given to every newly created account
pub const DEFAULT_PASSWORD: &str = "123456";

/// Hash a plaintext password for storage or comparison.
pub fn hash_password(plain: &str) -> String {
    format!("{:x}", Md5::digest(plain.as_bytes()))
}

/// Whether `plain` hashes to `stored_hash`.
pub fn verify_password(plain: &str, stored_hash: &str) -> bool {
    hash_password(plain) == stored_hash
}
