//! ECDH shared-secret derivation
//!
//! Parses a peer's encoded public key, reconstructs the curve point,
//! validates it lies on P-256, and runs the Diffie-Hellman agreement
//! against a local [`KeyPair`]. The peer encoding is validated in full
//! before any of it is interpreted; malformed input is rejected with
//! [`Error::InvalidPublicKeyEncoding`] and can never cause out-of-bounds
//! access.

use crate::error::{Error, Result};
use crate::keypair::{
    ASN1_PUBLIC_KEY_PREFIX, COORDINATE_HEX_LEN, FIELD_SIZE, KeyPair, PUBLIC_KEY_HEX_LEN,
};
use p256::elliptic_curve::sec1::FromEncodedPoint;
use p256::{EncodedPoint, PublicKey};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// The raw output of an ECDH key agreement
///
/// Holds the x-coordinate of the shared curve point: 32 bytes for P-256.
/// The bytes are owned by the caller and zeroized when the value is
/// dropped.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SharedSecret {
    bytes: Vec<u8>,
}

impl SharedSecret {
    /// The shared secret bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Length of the secret in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the secret is empty; never true for a derived secret
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedSecret")
            .field("len", &self.bytes.len())
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}

/// Derive the ECDH shared secret between a local key pair and a peer's
/// encoded public key
///
/// The peer encoding must be exactly [`PUBLIC_KEY_HEX_LEN`] characters:
/// the ASN.1 prefix followed by the X and Y coordinates as 64 hex
/// characters each. Hex and prefix matching are case-insensitive.
///
/// # Errors
/// * [`Error::InvalidPublicKeyEncoding`] - the encoding is mis-sized,
///   carries the wrong prefix, or contains non-hex coordinate characters
/// * [`Error::KeyConsistency`] - the decoded coordinates are not a valid
///   point on P-256
pub fn derive_shared_secret(local: &KeyPair, peer_public_key: &str) -> Result<SharedSecret> {
    if !peer_public_key.is_ascii() {
        return Err(Error::InvalidPublicKeyEncoding(
            "encoding contains non-ASCII characters".to_string(),
        ));
    }
    if peer_public_key.len() != PUBLIC_KEY_HEX_LEN {
        return Err(Error::InvalidPublicKeyEncoding(format!(
            "expected {} characters, got {}",
            PUBLIC_KEY_HEX_LEN,
            peer_public_key.len()
        )));
    }

    let (prefix, coordinates) = peer_public_key.split_at(ASN1_PUBLIC_KEY_PREFIX.len());
    if !prefix.eq_ignore_ascii_case(ASN1_PUBLIC_KEY_PREFIX) {
        return Err(Error::InvalidPublicKeyEncoding(
            "missing ASN.1 SubjectPublicKeyInfo prefix".to_string(),
        ));
    }

    let (x_hex, y_hex) = coordinates.split_at(COORDINATE_HEX_LEN);
    let x = hex::decode(x_hex).map_err(|e| {
        Error::InvalidPublicKeyEncoding(format!("X coordinate is not valid hex: {}", e))
    })?;
    let y = hex::decode(y_hex).map_err(|e| {
        Error::InvalidPublicKeyEncoding(format!("Y coordinate is not valid hex: {}", e))
    })?;

    // Rebuild the SEC1 uncompressed point: 0x04 || X || Y
    let mut point_bytes = Vec::with_capacity(1 + 2 * FIELD_SIZE);
    point_bytes.push(0x04);
    point_bytes.extend_from_slice(&x);
    point_bytes.extend_from_slice(&y);

    let encoded_point = EncodedPoint::from_bytes(&point_bytes).map_err(|e| {
        Error::InvalidPublicKeyEncoding(format!("malformed curve point: {}", e))
    })?;

    // This checks the point is on the curve and returns the public key
    let peer_key_opt = PublicKey::from_encoded_point(&encoded_point);
    if peer_key_opt.is_none().into() {
        return Err(Error::KeyConsistency(
            "peer public key is not a valid point on P-256".to_string(),
        ));
    }
    let peer_key = peer_key_opt.unwrap();

    let shared = p256::ecdh::diffie_hellman(
        local.secret_key().to_nonzero_scalar(),
        peer_key.as_affine(),
    );
    let bytes = shared.raw_secret_bytes().to_vec();
    debug_assert_eq!(bytes.len(), FIELD_SIZE);

    tracing::debug!("derived {}-byte ECDH shared secret", bytes.len());

    Ok(SharedSecret { bytes })
}
