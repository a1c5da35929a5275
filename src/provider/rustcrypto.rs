// src/provider/rustcrypto.rs
//! Provider backed by the RustCrypto crates
//!
//! Every operation is a single forwarding call:
//! - HMAC-SHA256 / HMAC-SHA512 via `hmac` + `sha2`
//! - password hashing via `argon2` (Argon2i, v0x13)
//! - stream cipher via `salsa20` (XSalsa20)
//! - randomness via `rand`'s thread-local CSPRNG

use std::sync::OnceLock;

use argon2::{Algorithm, Argon2, Params, Version};
use hmac::digest::KeyInit;
use hmac::{Hmac, Mac};
use rand::rngs::OsRng;
use rand::{RngCore, TryRngCore};
use salsa20::cipher::{KeyIvInit, StreamCipher};
use salsa20::XSalsa20;
use sha2::{Sha256, Sha512};

use super::CryptoProvider;
use crate::config::{Config, KdfSettings};
use crate::consts::*;
use crate::enums::{CipherMode, HmacAlgorithm, KdfAlgorithm, KdfProfile};
use crate::error::{ProviderError, Result};

/// Cost parameters for the password-hashing routine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KdfParams {
    pub iterations: u32,
    pub memory_kib: u32,
}

impl KdfParams {
    pub const fn new(iterations: u32, memory_kib: u32) -> Self {
        Self {
            iterations,
            memory_kib,
        }
    }

    pub const fn from_profile(profile: KdfProfile) -> Self {
        let (iterations, memory_kib) = profile.costs();
        Self::new(iterations, memory_kib)
    }

    pub fn from_settings(settings: &KdfSettings) -> Self {
        let (iterations, memory_kib) = settings.costs();
        Self::new(iterations, memory_kib)
    }

    /// The exact hasher `kdf` runs for an output of `key_len` bytes
    pub fn hasher(&self, key_len: usize) -> Result<Argon2<'static>> {
        let params = Params::new(self.memory_kib, self.iterations, 1, Some(key_len))?;
        Ok(Argon2::new(Algorithm::Argon2i, Version::V0x13, params))
    }
}

impl Default for KdfParams {
    fn default() -> Self {
        Self::from_profile(KdfProfile::Interactive)
    }
}

#[derive(Debug)]
pub struct RustCryptoProvider {
    kdf: KdfParams,
    reseed_on_add_random: bool,
    activated: OnceLock<std::result::Result<(), String>>,
}

impl Default for RustCryptoProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl RustCryptoProvider {
    pub fn new() -> Self {
        Self::with_kdf_params(KdfParams::default())
    }

    pub fn with_kdf_params(kdf: KdfParams) -> Self {
        Self {
            kdf,
            reseed_on_add_random: true,
            activated: OnceLock::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            kdf: KdfParams::from_settings(&config.kdf),
            reseed_on_add_random: config.features.reseed_on_add_random,
            activated: OnceLock::new(),
        }
    }

    pub fn kdf_params(&self) -> KdfParams {
        self.kdf
    }

    pub fn reseeds_on_add_random(&self) -> bool {
        self.reseed_on_add_random
    }

    // One draw from the OS source, the way the wrapped library checks its RNG at init.
    fn readiness_check() -> std::result::Result<(), String> {
        let mut probe = [0u8; 16];
        OsRng.try_fill_bytes(&mut probe).map_err(|e| e.to_string())
    }
}

fn keyed_hash<M>(key: &[u8], in1: &[u8], in2: &[u8], out: &mut [u8]) -> Result<()>
where
    M: Mac + KeyInit,
{
    let mut mac = <M as Mac>::new_from_slice(key)
        .map_err(|_| ProviderError::InvalidArgument("HMAC key rejected".into()))?;
    if !in1.is_empty() {
        mac.update(in1);
    }
    if !in2.is_empty() {
        mac.update(in2);
    }
    let tag = mac.finalize().into_bytes();
    if out.len() < tag.len() {
        return Err(ProviderError::BufferTooSmall {
            needed: tag.len(),
            got: out.len(),
        });
    }
    out[..tag.len()].copy_from_slice(&tag);
    Ok(())
}

fn stream(key: &[u8], iv: &[u8]) -> Result<XSalsa20> {
    if key.len() != KEY_SZ {
        return Err(ProviderError::InvalidKeyLength {
            expected: KEY_SZ,
            got: key.len(),
        });
    }
    if iv.len() != IV_SZ {
        return Err(ProviderError::InvalidIvLength {
            expected: IV_SZ,
            got: iv.len(),
        });
    }
    XSalsa20::new_from_slices(key, iv).map_err(|_| ProviderError::Cipher)
}

impl CryptoProvider for RustCryptoProvider {
    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    fn version(&self) -> &'static str {
        PROVIDER_VERSION
    }

    fn activate(&self) -> Result<()> {
        let outcome = self.activated.get_or_init(|| {
            let res = Self::readiness_check();
            tracing::debug!(ok = res.is_ok(), "rustcrypto provider activated");
            res
        });
        outcome.clone().map_err(ProviderError::Activation)
    }

    fn deactivate(&self) -> Result<()> {
        Ok(())
    }

    fn random(&self, buf: &mut [u8]) -> Result<()> {
        rand::rng().fill_bytes(buf);
        Ok(())
    }

    // The offered bytes are not mixed in; the thread-local generator is reseeded from the OS.
    fn add_random(&self, _entropy: &[u8]) -> Result<()> {
        if !self.reseed_on_add_random {
            return Ok(());
        }
        rand::rng()
            .reseed()
            .map_err(|e| ProviderError::Random(e.to_string()))
    }

    fn hmac(
        &self,
        algorithm: HmacAlgorithm,
        key: &[u8],
        in1: &[u8],
        in2: &[u8],
        out: &mut [u8],
    ) -> Result<()> {
        match algorithm {
            HmacAlgorithm::Sha256 => keyed_hash::<Hmac<Sha256>>(key, in1, in2, out),
            HmacAlgorithm::Sha512 => keyed_hash::<Hmac<Sha512>>(key, in1, in2, out),
            other => Err(ProviderError::UnsupportedAlgorithm(other)),
        }
    }

    fn kdf(
        &self,
        algorithm: KdfAlgorithm,
        pass: &[u8],
        salt: &[u8],
        workfactor: u32,
        key: &mut [u8],
    ) -> Result<()> {
        if salt.len() != KDF_SALT_SZ {
            return Err(ProviderError::InvalidSaltLength {
                expected: KDF_SALT_SZ,
                got: salt.len(),
            });
        }
        tracing::trace!(
            ?algorithm,
            workfactor,
            iterations = self.kdf.iterations,
            memory_kib = self.kdf.memory_kib,
            key_len = key.len(),
            "argon2i key derivation"
        );
        self.kdf.hasher(key.len())?.hash_password_into(pass, salt, key)?;
        Ok(())
    }

    fn cipher(
        &self,
        _mode: CipherMode,
        key: &[u8],
        iv: &[u8],
        input: &[u8],
        out: &mut [u8],
    ) -> Result<()> {
        if out.len() < input.len() {
            return Err(ProviderError::BufferTooSmall {
                needed: input.len(),
                got: out.len(),
            });
        }
        stream(key, iv)?
            .apply_keystream_b2b(input, &mut out[..input.len()])
            .map_err(|_| ProviderError::Cipher)
    }

    fn cipher_in_place(
        &self,
        _mode: CipherMode,
        key: &[u8],
        iv: &[u8],
        buf: &mut [u8],
    ) -> Result<()> {
        stream(key, iv)?
            .try_apply_keystream(buf)
            .map_err(|_| ProviderError::Cipher)
    }

    fn cipher_name(&self) -> &'static str {
        CIPHER_NAME
    }

    fn key_size(&self) -> usize {
        KEY_SZ
    }

    fn iv_size(&self) -> usize {
        IV_SZ
    }

    fn block_size(&self) -> usize {
        BLOCK_SZ
    }

    fn hmac_size(&self, algorithm: HmacAlgorithm) -> usize {
        match algorithm {
            HmacAlgorithm::Sha256 => HMAC_SHA256_SZ,
            HmacAlgorithm::Sha512 => HMAC_SHA512_SZ,
            HmacAlgorithm::Sha1 => 0,
        }
    }
}
