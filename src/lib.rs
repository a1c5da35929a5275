// src/lib.rs
//! sqlcipher-rustcrypto-provider: a SQLCipher crypto provider backed by RustCrypto
//!
//! Features:
//! - `CryptoProvider` trait mirroring the host's provider table
//! - XSalsa20 stream cipher, HMAC-SHA256/512, Argon2i key derivation
//! - `extern "C"` table setup for linking into SQLCipher
//! - Full secure-gate v0.5 integration for keys handed out on the Rust side

pub mod aliases;
pub mod config;
pub mod consts;
pub mod enums;
pub mod error;
pub mod ffi;
pub mod key_ops;
pub mod provider;
pub mod registry;

// Re-export everything users need at the crate root
pub use aliases::{CipherKey32, KdfSalt16, Passphrase, StreamNonce24};
pub use config::load as load_config;
pub use enums::{CipherMode, HmacAlgorithm, KdfAlgorithm, KdfProfile};
pub use error::{ProviderError, Result, Status};
pub use ffi::{sqlcipher_rustcrypto_setup, SqlcipherProvider};
pub use provider::{CryptoProvider, KdfParams, ProviderDescriptor, RustCryptoProvider};
