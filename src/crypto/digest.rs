//! Password digest carried over from the intake form.
//!
//! This is a truncated, unsalted SHA-256 and offers no protection for the
//! password it is derived from. There is no verification path and nothing in
//! this crate authenticates against it. It exists only so intake rows keep the
//! same column contents; it must not be used as a credential store.

use sha2::{Digest, Sha256};

/// Number of hex characters kept from the SHA-256 output.
pub const LEGACY_DIGEST_LEN: usize = 8;

/// First eight hex characters of SHA-256 over the UTF-8 password bytes.
pub fn legacy_password_digest(password: &str) -> String {
    let hash = Sha256::digest(password.as_bytes());
    let mut hex = hex::encode(hash);
    hex.truncate(LEGACY_DIGEST_LEN);
    hex
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vector() {
        // sha256("password") = 5e884898da28...
        assert_eq!(legacy_password_digest("password"), "5e884898");
    }

    #[test]
    fn test_deterministic_and_fixed_length() {
        let a = legacy_password_digest("correct horse battery staple");
        let b = legacy_password_digest("correct horse battery staple");
        assert_eq!(a, b);
        assert_eq!(a.len(), LEGACY_DIGEST_LEN);
        assert_eq!(legacy_password_digest("").len(), LEGACY_DIGEST_LEN);
        assert_ne!(a, legacy_password_digest("correct horse battery stapler"));
    }
}
