//! Password hashing and verification
//!
//! This is a placeholder scheme for the in-memory demo: the "hash" is the
//! password behind a fixed prefix. It is not a security boundary.

const HASH_PREFIX: &str = "hashed_";

/// Derive the stored verification secret for `password`
pub fn hash_password(password: &str) -> String {
    format!("{HASH_PREFIX}{password}")
}

/// Check `password` against a secret produced by [`hash_password`]
pub fn verify_password(password: &str, hash: &str) -> bool {
    hash.strip_prefix(HASH_PREFIX) == Some(password)
}
