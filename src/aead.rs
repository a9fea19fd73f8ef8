//! AES-256-GCM authenticated encryption with detached tag
//!
//! Ciphertext has the same length as the plaintext; the 16-byte
//! authentication tag is returned separately and covers both the
//! ciphertext and any associated data. Decryption verifies the tag before
//! any plaintext is produced, so unauthenticated plaintext never reaches
//! the caller.
//!
//! Nonce uniqueness per key is the caller's responsibility; reusing a
//! (key, IV) pair for two plaintexts breaks confidentiality and is not
//! detected here.

use crate::error::{Error, Result};
use aes_gcm::{AeadInPlace, Aes256Gcm, KeyInit, Nonce};

/// AES-256 key size in bytes
pub const KEY_SIZE: usize = 32;

/// GCM nonce size in bytes
pub const NONCE_SIZE: usize = 12;

/// GCM authentication tag size in bytes
pub const AUTH_TAG_SIZE: usize = 16;

/// Output of [`encrypt_aes_gcm`]: ciphertext plus detached tag
///
/// `cipher_text.len()` always equals the plaintext length.
#[derive(Clone, Debug)]
pub struct EncryptionResult {
    /// Encrypted payload, same length as the plaintext
    pub cipher_text: Vec<u8>,
    /// Detached authentication tag over ciphertext and AAD
    pub auth_tag: [u8; AUTH_TAG_SIZE],
}

/// Encrypt a payload with AES-256-GCM
///
/// # Arguments
/// * `key` - 32-byte AES-256 key
/// * `iv` - 12-byte nonce, unique per key
/// * `aad` - optional associated data; authenticated but not encrypted
/// * `plain_text` - payload to encrypt
///
/// # Errors
/// [`Error::CipherUpdate`] if the key or IV length is rejected by the
/// cipher, or the encryption engine fails.
pub fn encrypt_aes_gcm(
    key: &[u8],
    iv: &[u8],
    aad: Option<&[u8]>,
    plain_text: &[u8],
) -> Result<EncryptionResult> {
    let cipher = Aes256Gcm::new_from_slice(key)
        .map_err(|e| Error::CipherUpdate(format!("failed to create AES-GCM cipher: {}", e)))?;

    if iv.len() != NONCE_SIZE {
        return Err(Error::CipherUpdate(format!(
            "unsupported IV length {}: AES-GCM requires a {}-byte nonce",
            iv.len(),
            NONCE_SIZE
        )));
    }
    let nonce = Nonce::from_slice(iv);

    let mut buffer = plain_text.to_vec();
    let tag = cipher
        .encrypt_in_place_detached(nonce, aad.unwrap_or(b""), &mut buffer)
        .map_err(|e| Error::CipherUpdate(format!("AES-GCM encryption failed: {}", e)))?;

    Ok(EncryptionResult {
        cipher_text: buffer,
        auth_tag: tag.into(),
    })
}

/// Decrypt an AES-256-GCM payload, verifying its detached tag
///
/// The tag is verified over the ciphertext and AAD before the keystream is
/// applied; on mismatch no plaintext bytes are returned.
///
/// # Arguments
/// * `key` - 32-byte AES-256 key
/// * `iv` - 12-byte nonce the payload was encrypted with
/// * `aad` - associated data supplied at encryption time, if any
/// * `cipher_text` - encrypted payload
/// * `auth_tag` - 16-byte detached authentication tag
///
/// # Errors
/// * [`Error::Authentication`] - the tag does not match the ciphertext
///   and AAD under this key and IV
/// * [`Error::CipherUpdate`] - the key, IV, or tag length is malformed
pub fn decrypt_aes_gcm(
    key: &[u8],
    iv: &[u8],
    aad: Option<&[u8]>,
    cipher_text: &[u8],
    auth_tag: &[u8],
) -> Result<Vec<u8>> {
    let cipher = Aes256Gcm::new_from_slice(key)
        .map_err(|e| Error::CipherUpdate(format!("failed to create AES-GCM cipher: {}", e)))?;

    if iv.len() != NONCE_SIZE {
        return Err(Error::CipherUpdate(format!(
            "unsupported IV length {}: AES-GCM requires a {}-byte nonce",
            iv.len(),
            NONCE_SIZE
        )));
    }
    let nonce = Nonce::from_slice(iv);

    if auth_tag.len() != AUTH_TAG_SIZE {
        return Err(Error::CipherUpdate(format!(
            "invalid authentication tag length {}: expected {} bytes",
            auth_tag.len(),
            AUTH_TAG_SIZE
        )));
    }
    let tag = aes_gcm::Tag::from_slice(auth_tag);

    let mut buffer = cipher_text.to_vec();
    cipher
        .decrypt_in_place_detached(nonce, aad.unwrap_or(b""), &mut buffer, tag)
        .map_err(|_| {
            tracing::warn!("AES-GCM authentication failed; rejecting ciphertext");
            Error::Authentication
        })?;

    Ok(buffer)
}
