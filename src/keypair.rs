//! P-256 key pair generation and textual encoding
//!
//! A [`KeyPair`] owns the curve secret for one side of a key agreement and
//! carries immutable hex snapshots of the key material. The public key is
//! exported in the interchange format expected by peers: a fixed ASN.1
//! SubjectPublicKeyInfo prefix followed by the X and Y affine coordinates,
//! each as fixed-width hex.

use crate::ecdh::{self, SharedSecret};
use crate::error::{Error, Result};
use p256::elliptic_curve::sec1::{FromEncodedPoint, ToEncodedPoint};
use p256::{PublicKey, SecretKey};
use rand::rngs::OsRng;
use std::fmt;
use zeroize::Zeroize;

/// ASN.1 DER prefix identifying an uncompressed P-256 SubjectPublicKeyInfo,
/// including the leading 0x04 point-format octet. Prepended verbatim to the
/// hex-encoded curve coordinates.
pub const ASN1_PUBLIC_KEY_PREFIX: &str =
    "3059301306072a8648ce3d020106082a8648ce3d03010703420004";

/// P-256 field element size in bytes
pub const FIELD_SIZE: usize = 32;

/// Width in hex characters of one encoded curve coordinate
pub const COORDINATE_HEX_LEN: usize = FIELD_SIZE * 2;

/// Total length in characters of an encoded public key
pub const PUBLIC_KEY_HEX_LEN: usize = ASN1_PUBLIC_KEY_PREFIX.len() + 2 * COORDINATE_HEX_LEN;

/// A P-256 key pair with its exported textual encodings
///
/// The curve secret is exclusively owned by the `KeyPair` and released when
/// it is dropped; the private-key hex is zeroized at the same point. The
/// textual snapshots are immutable for the life of the pair.
pub struct KeyPair {
    public_key: String,
    private_key: String,
    secret: SecretKey,
}

impl KeyPair {
    /// Generate a new random P-256 key pair
    ///
    /// The private scalar is drawn from the operating system RNG. The
    /// exported public key is `ASN1_PUBLIC_KEY_PREFIX || hex(X) || hex(Y)`
    /// with each coordinate zero-padded to 64 hex characters; the private
    /// key is the big-endian scalar as 64 hex characters.
    ///
    /// # Errors
    /// Returns [`Error::KeyConsistency`] if the generated public key does
    /// not pass curve validation.
    pub fn generate() -> Result<Self> {
        let mut rng = OsRng;
        let secret = SecretKey::random(&mut rng);
        let public = secret.public_key();
        let point = public.to_encoded_point(false);

        let (x, y) = match (point.x(), point.y()) {
            (Some(x), Some(y)) => (x, y),
            _ => {
                return Err(Error::KeyConsistency(
                    "generated public key has no affine coordinates".to_string(),
                ))
            }
        };

        // Re-parse the encoding; this checks the point is on the curve
        if PublicKey::from_encoded_point(&point).is_none().into() {
            return Err(Error::KeyConsistency(
                "generated public key failed curve validation".to_string(),
            ));
        }

        let mut public_key = String::with_capacity(PUBLIC_KEY_HEX_LEN);
        public_key.push_str(ASN1_PUBLIC_KEY_PREFIX);
        public_key.push_str(&hex::encode(x));
        public_key.push_str(&hex::encode(y));

        let private_key = hex::encode(secret.to_bytes());

        tracing::debug!("generated P-256 key pair");

        Ok(Self {
            public_key,
            private_key,
            secret,
        })
    }

    /// The encoded public key: ASN.1 prefix plus fixed-width hex coordinates
    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    /// The private scalar as 64 big-endian hex characters
    pub fn private_key(&self) -> &str {
        &self.private_key
    }

    /// Derive the ECDH shared secret against a peer's encoded public key
    ///
    /// Convenience forwarding to [`ecdh::derive_shared_secret`].
    pub fn derive_shared_secret(&self, peer_public_key: &str) -> Result<SharedSecret> {
        ecdh::derive_shared_secret(self, peer_public_key)
    }

    pub(crate) fn secret_key(&self) -> &SecretKey {
        &self.secret
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("public_key", &self.public_key)
            .field("private_key", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

impl Drop for KeyPair {
    fn drop(&mut self) {
        // The inner SecretKey zeroizes itself on drop
        self.private_key.zeroize();
    }
}
