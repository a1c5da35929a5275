// tests/key_tests.rs
mod common;
use common::fast_provider;

use sqlcipher_rustcrypto_provider::key_ops::{
    derive_key, generate_key, generate_nonce, generate_salt, raw_key_pragma,
};
use sqlcipher_rustcrypto_provider::{CipherKey32, KdfSalt16, Passphrase};

#[test]
fn test_generate_key_is_random_and_32_bytes() {
    let key1 = generate_key();
    let key2 = generate_key();
    assert_eq!(key1.expose_secret().len(), 32);
    assert_ne!(
        key1.expose_secret().as_slice(),
        key2.expose_secret().as_slice()
    );
}

#[test]
fn test_generate_nonce_and_salt_sizes() {
    assert_eq!(generate_nonce().expose_secret().len(), 24);
    assert_eq!(generate_salt().expose_secret().len(), 16);
    assert_ne!(
        generate_salt().expose_secret().as_slice(),
        generate_salt().expose_secret().as_slice()
    );
}

#[test]
fn test_derive_key_is_deterministic_per_salt() {
    let provider = fast_provider();
    let pass = Passphrase::new(b"open sesame".to_vec());
    let salt = KdfSalt16::new([0x10; 16]);

    let a = derive_key(&provider, &pass, &salt).unwrap();
    let b = derive_key(&provider, &pass, &salt).unwrap();
    assert_eq!(a.expose_secret(), b.expose_secret());

    let other = derive_key(&provider, &pass, &KdfSalt16::new([0x11; 16])).unwrap();
    assert_ne!(a.expose_secret(), other.expose_secret());
}

#[test]
fn test_derive_key_differs_per_passphrase() {
    let provider = fast_provider();
    let salt = generate_salt();
    let a = derive_key(&provider, &Passphrase::new(b"one".to_vec()), &salt).unwrap();
    let b = derive_key(&provider, &Passphrase::new(b"two".to_vec()), &salt).unwrap();
    assert_ne!(a.expose_secret(), b.expose_secret());
}

#[test]
fn test_raw_key_pragma_format() {
    let key = CipherKey32::new([0x42; 32]);
    let salt = KdfSalt16::new([0x01; 16]);
    assert_eq!(
        raw_key_pragma(&key, &salt),
        format!("x'{}{}'", "42".repeat(32), "01".repeat(16))
    );
}
