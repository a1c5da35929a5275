// src/config/app.rs
use super::defaults::*;
use serde::Deserialize;
use std::path::Path;
use std::sync::OnceLock;

use crate::enums::KdfProfile;
use crate::error::Result;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub kdf: KdfSettings,
    pub features: Features,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            kdf: default_kdf(),
            features: default_features(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct KdfSettings {
    pub profile: KdfProfile,
    /// Overrides the profile's pass count
    pub iterations: Option<u32>,
    /// Overrides the profile's memory cost
    pub memory_kib: Option<u32>,
}

impl Default for KdfSettings {
    fn default() -> Self {
        default_kdf()
    }
}

impl KdfSettings {
    /// Effective `(iterations, memory_kib)` after overrides
    pub fn costs(&self) -> (u32, u32) {
        let (iterations, memory_kib) = self.profile.costs();
        (
            self.iterations.unwrap_or(iterations),
            self.memory_kib.unwrap_or(memory_kib),
        )
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Features {
    /// Reseed the thread-local RNG when the host offers extra entropy
    pub reseed_on_add_random: bool,
}

impl Default for Features {
    fn default() -> Self {
        default_features()
    }
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Parse one TOML file. Env overrides are not applied here.
pub fn try_load_from(path: impl AsRef<Path>) -> Result<Config> {
    let content = std::fs::read_to_string(path.as_ref())?;
    Ok(toml::from_str(&content)?)
}

/// Read the file named by `SQLCIPHER_PROVIDER_CONFIG` (or the default path),
/// fall back to built-in defaults when it does not exist, then apply env overrides.
pub fn try_load() -> Result<Config> {
    let config_path =
        std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

    let mut conf = if Path::new(&config_path).exists() {
        tracing::debug!(path = %config_path, "loading provider config");
        try_load_from(&config_path)?
    } else {
        tracing::debug!(path = %config_path, "no provider config file, using built-in defaults");
        Config::default()
    };

    if let Ok(profile) = std::env::var(KDF_PROFILE_ENV) {
        apply_profile_override(&mut conf, &profile);
    }

    Ok(conf)
}

/// Apply a `SQLCIPHER_PROVIDER_KDF_PROFILE` value. An unparsable value is
/// logged and leaves the file's settings in place.
pub fn apply_profile_override(conf: &mut Config, profile: &str) {
    match profile.parse() {
        Ok(parsed) => conf.kdf.profile = parsed,
        Err(err) => {
            tracing::warn!(%err, "ignoring {KDF_PROFILE_ENV}, keeping configured KDF profile")
        }
    }
}

/// Global config, loaded once, falls back to defaults on any error
pub fn load() -> &'static Config {
    CONFIG.get_or_init(|| {
        try_load().unwrap_or_else(|err| {
            tracing::warn!(%err, "invalid provider config, using built-in defaults");
            Config::default()
        })
    })
}
