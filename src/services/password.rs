//! Placeholder password hashing
//!
//! The registration demo endpoints need a "hash" whose relationship to the
//! input is visible in the response, so this module derives one by prefixing
//! the password with a fixed marker instead of running a real KDF.
//!
//! # Security
//!
//! This is not hashing. It is deterministic, reversible, and exists only so
//! the projection behavior of the demo endpoints can be observed. Never
//! store real credentials with it.

/// Fixed stand-in hash for the endpoint that does not derive from the
/// password at all.
pub const PLACEHOLDER_HASH: &str = "fakehashedsecret";

const HASH_PREFIX: &str = "supersecret";

/// Derive the demo "hash" for a password.
pub fn pseudo_hash(password: &str) -> String {
    format!("{HASH_PREFIX}{password}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pseudo_hash_is_deterministic() {
        assert_eq!(pseudo_hash("hunter2"), pseudo_hash("hunter2"));
    }

    #[test]
    fn test_pseudo_hash_prefixes_the_password() {
        assert_eq!(pseudo_hash("hunter2"), "supersecrethunter2");
    }

    #[test]
    fn test_pseudo_hash_differs_from_raw_password() {
        let password = "hunter2";
        assert_ne!(pseudo_hash(password), password);
    }

    #[test]
    fn test_pseudo_hash_of_empty_password_is_just_the_prefix() {
        assert_eq!(pseudo_hash(""), "supersecret");
    }

    #[test]
    fn test_placeholder_hash_is_the_fixed_marker() {
        assert_eq!(PLACEHOLDER_HASH, "fakehashedsecret");
    }
}
