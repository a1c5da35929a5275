// src/provider/mod.rs
//! The provider contract
//!
//! [`CryptoProvider`] is the Rust shape of the host's provider table: one
//! method per table entry, minus the per-context hooks which only exist at
//! the C boundary. Implementations forward every call to a wrapped library.

pub mod rustcrypto;

pub use rustcrypto::{KdfParams, RustCryptoProvider};

use crate::enums::{CipherMode, HmacAlgorithm, KdfAlgorithm};
use crate::error::Result;

pub trait CryptoProvider: Send + Sync {
    fn name(&self) -> &'static str;

    fn version(&self) -> &'static str;

    /// Must be safe to call any number of times.
    fn activate(&self) -> Result<()>;

    fn deactivate(&self) -> Result<()>;

    /// Fill `buf` with cryptographically secure random bytes.
    fn random(&self, buf: &mut [u8]) -> Result<()>;

    /// Offer extra entropy to the random source.
    fn add_random(&self, entropy: &[u8]) -> Result<()>;

    /// Keyed hash over `in1 || in2`, written to the front of `out`.
    /// Empty inputs are skipped.
    fn hmac(
        &self,
        algorithm: HmacAlgorithm,
        key: &[u8],
        in1: &[u8],
        in2: &[u8],
        out: &mut [u8],
    ) -> Result<()>;

    /// Derive `key.len()` bytes from a password.
    fn kdf(
        &self,
        algorithm: KdfAlgorithm,
        pass: &[u8],
        salt: &[u8],
        workfactor: u32,
        key: &mut [u8],
    ) -> Result<()>;

    /// Transform `input` into the first `input.len()` bytes of `out`.
    fn cipher(
        &self,
        mode: CipherMode,
        key: &[u8],
        iv: &[u8],
        input: &[u8],
        out: &mut [u8],
    ) -> Result<()>;

    /// Same transform as [`CryptoProvider::cipher`] over a single buffer.
    fn cipher_in_place(&self, mode: CipherMode, key: &[u8], iv: &[u8], buf: &mut [u8])
        -> Result<()>;

    fn cipher_name(&self) -> &'static str;

    fn key_size(&self) -> usize;

    fn iv_size(&self) -> usize;

    fn block_size(&self) -> usize;

    /// Output width of `algorithm`, or 0 when it is not served.
    fn hmac_size(&self, algorithm: HmacAlgorithm) -> usize;

    fn fips_status(&self) -> bool {
        false
    }

    /// Snapshot of the fixed names and sizes.
    fn describe(&self) -> ProviderDescriptor {
        ProviderDescriptor {
            name: self.name(),
            version: self.version(),
            cipher: self.cipher_name(),
            key_size: self.key_size(),
            iv_size: self.iv_size(),
            block_size: self.block_size(),
            hmac_sha256_size: self.hmac_size(HmacAlgorithm::Sha256),
            hmac_sha512_size: self.hmac_size(HmacAlgorithm::Sha512),
            fips: self.fips_status(),
        }
    }
}

/// Fixed names and sizes the host queries at setup time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderDescriptor {
    pub name: &'static str,
    pub version: &'static str,
    pub cipher: &'static str,
    pub key_size: usize,
    pub iv_size: usize,
    pub block_size: usize,
    pub hmac_sha256_size: usize,
    pub hmac_sha512_size: usize,
    pub fips: bool,
}
