// tests/config_env_tests.rs
//! Own binary: sets process env and initializes the global config once
mod common;
use common::setup;

use std::fs;

use sqlcipher_rustcrypto_provider::config::{self, CONFIG_ENV, KDF_PROFILE_ENV};
use sqlcipher_rustcrypto_provider::KdfProfile;
use tempfile::tempdir;

#[test]
fn test_invalid_profile_env_keeps_file_config() {
    setup();
    let dir = tempdir().unwrap();
    let path = dir.path().join("provider.toml");
    fs::write(
        &path,
        "[kdf]\nprofile = \"sensitive\"\n\n[features]\nreseed_on_add_random = false\n",
    )
    .unwrap();

    std::env::set_var(CONFIG_ENV, &path);

    std::env::set_var(KDF_PROFILE_ENV, "moderate");
    let conf = config::try_load().unwrap();
    assert_eq!(conf.kdf.profile, KdfProfile::Moderate);
    assert!(!conf.features.reseed_on_add_random);

    std::env::set_var(KDF_PROFILE_ENV, "Sensitve");
    let conf = config::try_load().unwrap();
    assert_eq!(conf.kdf.profile, KdfProfile::Sensitive);
    assert!(!conf.features.reseed_on_add_random);

    let global = config::load();
    assert_eq!(global.kdf.profile, KdfProfile::Sensitive);
    assert!(!global.features.reseed_on_add_random);

    std::env::remove_var(KDF_PROFILE_ENV);
    std::env::remove_var(CONFIG_ENV);
}
