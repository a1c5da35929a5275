// tests/common.rs
//! Shared test utilities: logging setup and a cheap-KDF provider

#![allow(dead_code)]

use sqlcipher_rustcrypto_provider::{KdfParams, RustCryptoProvider};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Argon2i costs small enough for debug-build test runs
pub const FAST_KDF: KdfParams = KdfParams::new(2, 256);

/// Initialize test-friendly logging
/// Call once at the start of any test that needs logs
pub fn setup() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer()) // works in `cargo test`
        .with(EnvFilter::from_default_env()) // respects RUST_LOG=
        .try_init()
        .ok(); // idempotent, safe to call multiple times
}

pub fn fast_provider() -> RustCryptoProvider {
    RustCryptoProvider::with_kdf_params(FAST_KDF)
}
