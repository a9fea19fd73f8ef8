//! Error handling for the secure-channel primitives
//!
//! Every operation in this crate reports failure through [`Error`]; there
//! are no silently-empty or zeroed success values. Each failure kind is a
//! distinct variant so callers can match on the exact condition.

use thiserror::Error;

/// Type alias for Results with secure-channel errors
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the secure-channel primitives
#[derive(Error, Debug)]
pub enum Error {
    /// Curve group instantiation failed
    #[error("Curve initialization failed: {0}")]
    CurveInit(String),

    /// Key pair generation failed
    #[error("Key generation failed: {0}")]
    KeyGen(String),

    /// A key did not pass the curve's consistency check
    #[error("Key consistency check failed: {0}")]
    KeyConsistency(String),

    /// A peer public key encoding is malformed or mis-sized
    #[error("Invalid public key encoding: {0}")]
    InvalidPublicKeyEncoding(String),

    /// The ECDH agreement computation failed
    #[error("ECDH agreement failed: {0}")]
    Agreement(String),

    /// AEAD tag verification failed; no plaintext is released
    #[error("Authentication failed: ciphertext, tag, or associated data was tampered with")]
    Authentication,

    /// Low-level cipher engine error or rejected cipher parameter
    #[error("Cipher operation failed: {0}")]
    CipherUpdate(String),

    /// Low-level digest engine error
    #[error("Digest operation failed: {0}")]
    Digest(String),
}
