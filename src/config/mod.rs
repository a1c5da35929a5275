// src/config/mod.rs
//! Configuration system for the provider
//!
//! Central, lazy-loaded global config with TOML + env overrides.

pub use app::{
    apply_profile_override, load, try_load, try_load_from, Config, Features, KdfSettings,
};

mod app;
mod defaults;

pub use defaults::{CONFIG_ENV, DEFAULT_CONFIG_PATH, KDF_PROFILE_ENV};
