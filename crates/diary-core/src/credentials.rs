//! Password hashing and verification.
//!
//! A single unsalted SHA-256 digest over the raw password bytes, encoded
//! as lowercase hex. The digest is the first line of every account record,
//! so the encoding is part of the on-disk format.

use sha2::{Digest, Sha256};

/// Length of the hex-encoded digest line.
pub const HASH_LEN: usize = 64;

/// Hash a password for storage.
pub fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

/// Check a password attempt against a stored hash.
pub fn verify_password(stored_hash: &str, entered: &str) -> bool {
    stored_hash == hash_password(entered)
}

/// Whether a record line has the shape of a stored password hash.
pub fn is_password_hash(line: &str) -> bool {
    line.len() == HASH_LEN
        && line
            .chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase())
}
