// src/aliases.rs
//! Re-exports secure-gate's ergonomic secret types
//!
//! These are the canonical secret types handed out by the Rust-side API.

pub use secure_gate::{
    dynamic_alias, fixed_alias, random_alias, SecureConversionsExt, SecureRandomExt,
};

// Fixed-size secrets
fixed_alias!(CipherKey32, 32); // 256-bit XSalsa20 key
fixed_alias!(StreamNonce24, 24); // 192-bit XSalsa20 nonce
fixed_alias!(KdfSalt16, 16);

// Dynamic secrets
dynamic_alias!(Passphrase, Vec<u8>);

// Random secrets
random_alias!(RandomCipherKey32, 32);
random_alias!(RandomStreamNonce24, 24);
random_alias!(RandomKdfSalt16, 16);
