// tests/registry_tests.rs
//! Registration is process-wide, so the whole sequence runs in one test
mod common;
use common::{fast_provider, setup, FAST_KDF};

use sqlcipher_rustcrypto_provider::{registry, ProviderError, RustCryptoProvider};

#[test]
fn test_register_once_then_read_only() {
    setup();
    assert!(!registry::is_registered());

    let installed = registry::register(Box::new(fast_provider())).unwrap();
    assert!(registry::is_registered());
    assert_eq!(installed.name(), "rustcrypto");

    let second = registry::register(Box::new(RustCryptoProvider::new()));
    assert!(matches!(second, Err(ProviderError::AlreadyRegistered)));

    // Still the first provider: its cheap KDF is what runs
    let mut ours = [0u8; 32];
    let mut expected = [0u8; 32];
    let salt = [9u8; 16];
    registry::provider()
        .kdf(
            sqlcipher_rustcrypto_provider::KdfAlgorithm::Pbkdf2HmacSha512,
            b"pw",
            &salt,
            0,
            &mut ours,
        )
        .unwrap();
    FAST_KDF
        .hasher(32)
        .unwrap()
        .hash_password_into(b"pw", &salt, &mut expected)
        .unwrap();
    assert_eq!(ours, expected);

    let d = registry::descriptor();
    assert_eq!(*d, installed.describe());
    assert_eq!(d.key_size, 32);
    assert_eq!(d.iv_size, 24);
}
