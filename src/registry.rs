// src/registry.rs
//! Process-wide provider registration
//!
//! The provider and its descriptor are written once and read-only afterwards.
//! When nothing was registered explicitly, the first lookup installs a
//! [`RustCryptoProvider`] built from the global config.

use std::sync::OnceLock;

use crate::config;
use crate::error::{ProviderError, Result};
use crate::provider::{CryptoProvider, ProviderDescriptor, RustCryptoProvider};

struct Registered {
    provider: Box<dyn CryptoProvider>,
    descriptor: ProviderDescriptor,
}

impl Registered {
    fn new(provider: Box<dyn CryptoProvider>) -> Self {
        let descriptor = provider.describe();
        Self {
            provider,
            descriptor,
        }
    }
}

static REGISTERED: OnceLock<Registered> = OnceLock::new();

/// Install `provider` for the rest of the process.
///
/// Fails with [`ProviderError::AlreadyRegistered`] if a provider is already
/// installed, including the default one installed by an earlier lookup.
pub fn register(provider: Box<dyn CryptoProvider>) -> Result<&'static dyn CryptoProvider> {
    REGISTERED
        .set(Registered::new(provider))
        .map_err(|_| ProviderError::AlreadyRegistered)?;
    let registered = registered();
    tracing::debug!(
        name = registered.descriptor.name,
        version = registered.descriptor.version,
        "crypto provider registered"
    );
    Ok(registered.provider.as_ref())
}

fn registered() -> &'static Registered {
    REGISTERED.get_or_init(|| {
        let provider = RustCryptoProvider::from_config(config::load());
        tracing::debug!("no provider registered, installing rustcrypto default");
        Registered::new(Box::new(provider))
    })
}

/// The installed provider
pub fn provider() -> &'static dyn CryptoProvider {
    registered().provider.as_ref()
}

/// Descriptor captured when the provider was installed
pub fn descriptor() -> &'static ProviderDescriptor {
    &registered().descriptor
}

pub fn is_registered() -> bool {
    REGISTERED.get().is_some()
}
