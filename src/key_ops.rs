// src/key_ops.rs
//! Key generation and derivation helpers
//!
//! Secret-wrapped conveniences over a [`CryptoProvider`], plus the raw-key
//! form SQLCipher accepts in `PRAGMA key`.

use zeroize::Zeroize;

use crate::aliases::{
    CipherKey32, KdfSalt16, Passphrase, RandomCipherKey32, RandomKdfSalt16, RandomStreamNonce24,
    SecureConversionsExt, SecureRandomExt, StreamNonce24,
};
use crate::consts::KEY_SZ;
use crate::enums::KdfAlgorithm;
use crate::error::Result;
use crate::provider::CryptoProvider;

pub type Key = CipherKey32;

/// Generate a new random 256-bit cipher key
#[inline]
pub fn generate_key() -> Key {
    Key::new(**RandomCipherKey32::new())
}

#[inline]
pub fn generate_nonce() -> StreamNonce24 {
    StreamNonce24::new(**RandomStreamNonce24::new())
}

#[inline]
pub fn generate_salt() -> KdfSalt16 {
    KdfSalt16::new(**RandomKdfSalt16::new())
}

/// Derive a cipher key from a passphrase through `provider`'s KDF
pub fn derive_key(
    provider: &dyn CryptoProvider,
    passphrase: &Passphrase,
    salt: &KdfSalt16,
) -> Result<Key> {
    let mut buf = [0u8; KEY_SZ];
    let res = provider.kdf(
        KdfAlgorithm::Pbkdf2HmacSha512,
        passphrase.expose_secret().as_slice(),
        salt.expose_secret(),
        0,
        &mut buf,
    );
    let key = res.map(|()| Key::new(buf));
    buf.zeroize();
    key
}

/// `x'<hex key><hex salt>'`: raw key material for `PRAGMA key`, skipping the host's own KDF
pub fn raw_key_pragma(key: &Key, salt: &KdfSalt16) -> String {
    format!(
        "x'{}{}'",
        key.expose_secret().to_hex(),
        salt.expose_secret().to_hex()
    )
}
