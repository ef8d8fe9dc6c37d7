use sha1::{Digest, Sha1};

/// Length of the k-anonymity prefix sent to the range endpoint (5 hex chars).
pub const PREFIX_LEN: usize = 5;

/// Hexadecimal SHA-1 digest of a UTF-8 string.
///
/// Always 40 lowercase hex characters, whatever the input length.
pub fn sha1_hex(input: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}

/// First [`PREFIX_LEN`] hex characters of a password's SHA-1 digest,
/// uppercased to match the range API's response alphabet.
pub fn range_prefix(password: &str) -> String {
    let mut prefix = sha1_hex(password);
    prefix.truncate(PREFIX_LEN);
    prefix.make_ascii_uppercase();
    prefix
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha1_hex_known_vectors() {
        assert_eq!(
            sha1_hex("password"),
            "5baa61e4c9b93f3f0682250b6cf8331b7ee68fd3"
        );
        assert_eq!(
            sha1_hex("qwerty"),
            "b1b3773a05c0ed0176787a4f1574ff0075f7521e"
        );
        assert_eq!(sha1_hex(""), "da39a3ee5e6b4b0d3255bfef95601890afd80709");
    }

    #[test]
    fn test_sha1_hex_shape() {
        let digest = sha1_hex("password");
        assert_eq!(digest.len(), 40);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(digest, digest.to_ascii_lowercase());
    }

    #[test]
    fn test_sha1_hex_deterministic() {
        assert_eq!(sha1_hex("password"), sha1_hex("password"));
    }

    #[test]
    fn test_range_prefix() {
        assert_eq!(range_prefix("password"), "5BAA6");
        assert_eq!(range_prefix("password").len(), PREFIX_LEN);
    }
}
