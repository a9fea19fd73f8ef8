//! One-shot SHA-1 digesting
//!
//! Used for integrity and identification tasks that are independent of the
//! key-agreement and cipher paths.

use crate::error::Result;
use sha1::{Digest, Sha1};

/// Length in characters of a hex-encoded SHA-1 digest
pub const DIGEST_HEX_LEN: usize = 40;

/// Hash the input with SHA-1 and return the digest as lowercase hex
///
/// The digest is always [`DIGEST_HEX_LEN`] characters. The pure-Rust
/// digest engine cannot fail; the `Result` return is part of the stable
/// contract for fallible backends.
pub fn sha1_hex(input: &[u8]) -> Result<String> {
    let mut hasher = Sha1::new();
    hasher.update(input);
    Ok(hex::encode(hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_vector() {
        let digest = sha1_hex(b"").unwrap();
        assert_eq!(digest, "da39a3ee5e6b4b0d3255bfef95601890afd80709");
    }

    #[test]
    fn test_abc_vector() {
        let digest = sha1_hex(b"abc").unwrap();
        assert_eq!(digest, "a9993e364706816aba3e25717850c26c9cd0d89d");
    }

    #[test]
    fn test_fox_vector() {
        let digest = sha1_hex(b"The quick brown fox jumps over the lazy dog").unwrap();
        assert_eq!(digest, "2fd4e1c67a2d28fced849ee1bb76e7391b93eb12");
    }

    #[test]
    fn test_digest_is_lowercase_fixed_width() {
        let digest = sha1_hex(b"some input").unwrap();
        assert_eq!(digest.len(), DIGEST_HEX_LEN);
        assert!(digest
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }
}
