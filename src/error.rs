// src/error.rs
//! Public error type for the entire crate
//!
//! Inside the crate every failure is typed. At the host boundary they all
//! collapse into `SQLITE_ERROR` through [`Status`].

use thiserror::Error;

use crate::consts::{SQLITE_ERROR, SQLITE_OK};
use crate::enums::HmacAlgorithm;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("unknown algorithm identifier {0}")]
    UnknownAlgorithmId(i32),

    #[error("algorithm {0:?} is not supported by this provider")]
    UnsupportedAlgorithm(HmacAlgorithm),

    #[error("invalid key length: expected {expected}, got {got}")]
    InvalidKeyLength { expected: usize, got: usize },

    #[error("invalid IV length: expected {expected}, got {got}")]
    InvalidIvLength { expected: usize, got: usize },

    #[error("invalid salt length: expected {expected}, got {got}")]
    InvalidSaltLength { expected: usize, got: usize },

    #[error("output buffer too small: need {needed}, got {got}")]
    BufferTooSmall { needed: usize, got: usize },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("random source failed: {0}")]
    Random(String),

    #[error("key derivation failed: {0}")]
    Kdf(argon2::Error),

    #[error("stream cipher failed")]
    Cipher,

    #[error("provider activation failed: {0}")]
    Activation(String),

    #[error("a provider is already registered")]
    AlreadyRegistered,

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

impl From<argon2::Error> for ProviderError {
    fn from(err: argon2::Error) -> Self {
        ProviderError::Kdf(err)
    }
}

pub type Result<T> = std::result::Result<T, ProviderError>;

/// The host's two-valued status convention
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    Error,
}

impl Status {
    pub const fn code(self) -> i32 {
        match self {
            Status::Ok => SQLITE_OK,
            Status::Error => SQLITE_ERROR,
        }
    }
}

impl<T> From<&Result<T>> for Status {
    fn from(res: &Result<T>) -> Self {
        match res {
            Ok(_) => Status::Ok,
            Err(_) => Status::Error,
        }
    }
}

impl<T> From<Result<T>> for Status {
    fn from(res: Result<T>) -> Self {
        Status::from(&res)
    }
}
