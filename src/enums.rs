// src/enums.rs
//! Public enum types used throughout the crate
//!
//! Each enum mirrors one of the host's integer identifiers. Conversion from
//! the raw integer is fallible: an identifier the host knows but this
//! provider cannot serve still converts, unknown ones do not.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ProviderError;

/// Keyed-hash algorithms the host can ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HmacAlgorithm {
    /// Known to the host, not served by this provider
    Sha1,
    Sha256,
    Sha512,
}

impl TryFrom<i32> for HmacAlgorithm {
    type Error = ProviderError;

    fn try_from(id: i32) -> Result<Self, Self::Error> {
        match id {
            SQLCIPHER_HMAC_SHA1 => Ok(Self::Sha1),
            SQLCIPHER_HMAC_SHA256 => Ok(Self::Sha256),
            SQLCIPHER_HMAC_SHA512 => Ok(Self::Sha512),
            other => Err(ProviderError::UnknownAlgorithmId(other)),
        }
    }
}

/// KDF identifiers the host passes along. The provider ignores them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KdfAlgorithm {
    Pbkdf2HmacSha1,
    Pbkdf2HmacSha256,
    Pbkdf2HmacSha512,
}

impl TryFrom<i32> for KdfAlgorithm {
    type Error = ProviderError;

    fn try_from(id: i32) -> Result<Self, Self::Error> {
        match id {
            SQLCIPHER_PBKDF2_HMAC_SHA1 => Ok(Self::Pbkdf2HmacSha1),
            SQLCIPHER_PBKDF2_HMAC_SHA256 => Ok(Self::Pbkdf2HmacSha256),
            SQLCIPHER_PBKDF2_HMAC_SHA512 => Ok(Self::Pbkdf2HmacSha512),
            other => Err(ProviderError::UnknownAlgorithmId(other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CipherMode {
    Decrypt,
    Encrypt,
}

impl TryFrom<i32> for CipherMode {
    type Error = ProviderError;

    fn try_from(id: i32) -> Result<Self, Self::Error> {
        match id {
            CIPHER_DECRYPT => Ok(Self::Decrypt),
            CIPHER_ENCRYPT => Ok(Self::Encrypt),
            other => Err(ProviderError::InvalidArgument(format!(
                "unknown cipher mode {other}"
            ))),
        }
    }
}

/// Cost presets of the wrapped password-hashing routine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum KdfProfile {
    #[default]
    Interactive,
    Moderate,
    Sensitive,
}

impl KdfProfile {
    /// `(iterations, memory_kib)` for this preset
    pub const fn costs(self) -> (u32, u32) {
        match self {
            Self::Interactive => (KDF_INTERACTIVE_ITERATIONS, KDF_INTERACTIVE_MEMORY_KIB),
            Self::Moderate => (KDF_MODERATE_ITERATIONS, KDF_MODERATE_MEMORY_KIB),
            Self::Sensitive => (KDF_SENSITIVE_ITERATIONS, KDF_SENSITIVE_MEMORY_KIB),
        }
    }
}

impl std::str::FromStr for KdfProfile {
    type Err = ProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "interactive" => Ok(Self::Interactive),
            "moderate" => Ok(Self::Moderate),
            "sensitive" => Ok(Self::Sensitive),
            other => Err(ProviderError::Config(format!("unknown KDF profile '{other}'"))),
        }
    }
}
