// src/config/defaults.rs
use crate::config::app::{Features, KdfSettings};
use crate::enums::KdfProfile;

/// Env var naming the TOML file to read
pub const CONFIG_ENV: &str = "SQLCIPHER_PROVIDER_CONFIG";

/// Env var overriding `kdf.profile`
pub const KDF_PROFILE_ENV: &str = "SQLCIPHER_PROVIDER_KDF_PROFILE";

pub const DEFAULT_CONFIG_PATH: &str = "sqlcipher-provider.toml";

pub fn default_kdf() -> KdfSettings {
    KdfSettings {
        profile: KdfProfile::Interactive,
        iterations: None,
        memory_kib: None,
    }
}

pub fn default_features() -> Features {
    Features {
        reseed_on_add_random: true,
    }
}
