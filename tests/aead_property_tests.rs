//! Property tests for the AES-256-GCM operations
//!
//! Round-trip and tamper-detection properties over arbitrary keys, IVs,
//! associated data, and payloads.

use channel_crypto::{decrypt_aes_gcm, encrypt_aes_gcm};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn round_trip_restores_plaintext(
        key in prop::array::uniform32(any::<u8>()),
        iv in prop::array::uniform12(any::<u8>()),
        aad in prop::option::of(prop::collection::vec(any::<u8>(), 0..64)),
        plaintext in prop::collection::vec(any::<u8>(), 0..512),
    ) {
        let sealed = encrypt_aes_gcm(&key, &iv, aad.as_deref(), &plaintext).unwrap();
        prop_assert_eq!(sealed.cipher_text.len(), plaintext.len());

        let opened = decrypt_aes_gcm(&key, &iv, aad.as_deref(), &sealed.cipher_text, &sealed.auth_tag).unwrap();
        prop_assert_eq!(opened, plaintext);
    }

    #[test]
    fn flipped_ciphertext_bit_is_rejected(
        key in prop::array::uniform32(any::<u8>()),
        iv in prop::array::uniform12(any::<u8>()),
        plaintext in prop::collection::vec(any::<u8>(), 1..256),
        position in any::<usize>(),
        bit in 0u8..8,
    ) {
        let sealed = encrypt_aes_gcm(&key, &iv, None, &plaintext).unwrap();

        let mut tampered = sealed.cipher_text.clone();
        let idx = position % tampered.len();
        tampered[idx] ^= 1 << bit;

        prop_assert!(decrypt_aes_gcm(&key, &iv, None, &tampered, &sealed.auth_tag).is_err());
    }

    #[test]
    fn flipped_tag_bit_is_rejected(
        key in prop::array::uniform32(any::<u8>()),
        iv in prop::array::uniform12(any::<u8>()),
        plaintext in prop::collection::vec(any::<u8>(), 0..256),
        position in any::<usize>(),
        bit in 0u8..8,
    ) {
        let sealed = encrypt_aes_gcm(&key, &iv, None, &plaintext).unwrap();

        let mut tampered = sealed.auth_tag;
        let idx = position % tampered.len();
        tampered[idx] ^= 1 << bit;

        prop_assert!(decrypt_aes_gcm(&key, &iv, None, &sealed.cipher_text, &tampered).is_err());
    }
}
