//! Cryptographic primitives for device secure channels
//!
//! This crate provides the four primitives needed to establish an
//! encrypted channel with a paired device: P-256 key-pair generation with
//! a fixed textual encoding, ECDH shared-secret derivation from a peer's
//! encoded public key, AES-256-GCM authenticated encryption with a
//! detached tag, and one-shot SHA-1 digesting.
//!
//! All operations are synchronous, in-memory, and stateless apart from the
//! key material each [`KeyPair`] owns. How the encoded public keys are
//! exchanged and how the derived secret is consumed belong to the session
//! layer built on top of this crate.
//!
//! ```
//! use channel_crypto::{decrypt_aes_gcm, derive_shared_secret, encrypt_aes_gcm, KeyPair};
//!
//! # fn main() -> channel_crypto::Result<()> {
//! let local = KeyPair::generate()?;
//! let remote = KeyPair::generate()?;
//!
//! // Both sides arrive at the same secret from the other's encoding
//! let secret = derive_shared_secret(&local, remote.public_key())?;
//!
//! let iv = [0x24u8; 12];
//! let sealed = encrypt_aes_gcm(secret.as_bytes(), &iv, None, b"hello")?;
//! let opened = decrypt_aes_gcm(secret.as_bytes(), &iv, None, &sealed.cipher_text, &sealed.auth_tag)?;
//! assert_eq!(opened, b"hello");
//! # Ok(())
//! # }
//! ```

/// AES-256-GCM authenticated encryption
pub mod aead;

/// SHA-1 digesting
pub mod digest;

/// ECDH shared-secret derivation
pub mod ecdh;

/// Error types
pub mod error;

/// P-256 key pair generation and encoding
pub mod keypair;

// Re-export the operation surface for convenience
pub use aead::{decrypt_aes_gcm, encrypt_aes_gcm, EncryptionResult};
pub use digest::sha1_hex;
pub use ecdh::{derive_shared_secret, SharedSecret};
pub use error::{Error, Result};
pub use keypair::KeyPair;

/// Version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
