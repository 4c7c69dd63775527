//! Deterministic resource identity.

use sha2::{Digest, Sha256};

/// Number of hex characters kept from the full digest.
const UNIVERSAL_ID_LEN: usize = 12;

/// Derive a stable cross-system identifier for one stored resource.
///
/// Hashes `public_id|version|created_at` (UTF-8) with SHA-256 and keeps
/// the first 12 lowercase hex characters. The same triple always yields
/// the same id; a changed version after re-upload yields a new one.
/// Store-internal churn fields (signature, etag) do not participate, so
/// they can rotate without changing identity.
///
/// # Examples
///
/// ```
/// use cumulus_core::universal_id;
///
/// let a = universal_id("gallery/sunset", 1700000001, "2024-01-15T10:00:00Z");
/// let b = universal_id("gallery/sunset", 1700000001, "2024-01-15T10:00:00Z");
/// assert_eq!(a, b);
/// assert_eq!(a.len(), 12);
/// ```
pub fn universal_id(public_id: &str, version: u64, created_at: &str) -> String {
    let identity = format!("{}|{}|{}", public_id, version, created_at);
    let mut hasher = Sha256::new();
    hasher.update(identity.as_bytes());
    let digest = format!("{:x}", hasher.finalize());
    digest[..UNIVERSAL_ID_LEN].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic_for_identical_triples() {
        let a = universal_id("folder/image", 42, "2024-06-01T00:00:00Z");
        let b = universal_id("folder/image", 42, "2024-06-01T00:00:00Z");
        assert_eq!(a, b);
    }

    #[test]
    fn each_field_changes_the_id() {
        let base = universal_id("folder/image", 42, "2024-06-01T00:00:00Z");
        assert_ne!(base, universal_id("folder/other", 42, "2024-06-01T00:00:00Z"));
        assert_ne!(base, universal_id("folder/image", 43, "2024-06-01T00:00:00Z"));
        assert_ne!(base, universal_id("folder/image", 42, "2024-06-02T00:00:00Z"));
    }

    #[test]
    fn exactly_twelve_lowercase_hex_chars() {
        let id = universal_id("x", 0, "");
        assert_eq!(id.len(), 12);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}
