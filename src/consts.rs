// src/consts.rs
//! Shared constants: sizes advertised to the host and its status/algorithm codes

/// Provider name reported through `get_provider_name`
pub const PROVIDER_NAME: &str = "rustcrypto";

/// Provider version reported through `get_provider_version`
pub const PROVIDER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name of the wrapped stream cipher
pub const CIPHER_NAME: &str = "xsalsa20";

/// XSalsa20 key length
pub const KEY_SZ: usize = 32;

/// XSalsa20 nonce length
pub const IV_SZ: usize = 24;

/// Nominal block size. A stream cipher has none, so report the AES-256 block size
pub const BLOCK_SZ: usize = 16;

pub const HMAC_SHA256_SZ: usize = 32;
pub const HMAC_SHA512_SZ: usize = 64;

/// Salt length the password-hashing routine accepts
pub const KDF_SALT_SZ: usize = 16;

// Host status codes
pub const SQLITE_OK: i32 = 0;
pub const SQLITE_ERROR: i32 = 1;

// Host HMAC identifiers
pub const SQLCIPHER_HMAC_SHA1: i32 = 0;
pub const SQLCIPHER_HMAC_SHA256: i32 = 1;
pub const SQLCIPHER_HMAC_SHA512: i32 = 2;

// Host KDF identifiers
pub const SQLCIPHER_PBKDF2_HMAC_SHA1: i32 = 0;
pub const SQLCIPHER_PBKDF2_HMAC_SHA256: i32 = 1;
pub const SQLCIPHER_PBKDF2_HMAC_SHA512: i32 = 2;

// Host cipher modes
pub const CIPHER_DECRYPT: i32 = 0;
pub const CIPHER_ENCRYPT: i32 = 1;

/// Argon2i "interactive" preset: passes
pub const KDF_INTERACTIVE_ITERATIONS: u32 = 4;
/// Argon2i "interactive" preset: 32 MiB
pub const KDF_INTERACTIVE_MEMORY_KIB: u32 = 32 * 1024;

pub const KDF_MODERATE_ITERATIONS: u32 = 6;
pub const KDF_MODERATE_MEMORY_KIB: u32 = 128 * 1024;

pub const KDF_SENSITIVE_ITERATIONS: u32 = 8;
pub const KDF_SENSITIVE_MEMORY_KIB: u32 = 512 * 1024;
