/*++

Licensed under the Apache-2.0 license.

File Name:

   config.rs

Abstract:

    File contains utilities for parsing configuration files

--*/

use anyhow::{anyhow, Context};
use fsbl_image_crypto::{rsa_priv_key_from_hex, rsa_pub_key_from_hex};
use fsbl_image_types::{ImageRsaPrivKey, ImageRsaPubKey};
use serde_derive::{Deserialize, Serialize};
use std::path::Path;
use zeroize::Zeroizing;

const DEFAULT_EXPONENT: u32 = 65537;

fn default_exponent() -> u32 {
    DEFAULT_EXPONENT
}

/// RSA-2048 Key Configuration. Numbers are big-endian hex strings.
#[derive(Default, Serialize, Deserialize)]
pub(crate) struct RsaKeyConfig {
    pub modulus: String,

    #[serde(default = "default_exponent")]
    pub exponent: u32,

    pub priv_exponent: Option<String>,
}

impl RsaKeyConfig {
    pub(crate) fn pub_key(&self) -> anyhow::Result<ImageRsaPubKey> {
        rsa_pub_key_from_hex(&self.modulus, self.exponent)
    }

    pub(crate) fn priv_key(&self) -> anyhow::Result<Zeroizing<ImageRsaPrivKey>> {
        let priv_exponent = self
            .priv_exponent
            .as_ref()
            .ok_or_else(|| anyhow!("Private exponent not specified"))?;
        rsa_priv_key_from_hex(&self.modulus, priv_exponent)
    }
}

// Key Configuration
#[derive(Default, Serialize, Deserialize)]
pub(crate) struct KeyConfig {
    pub ppk: RsaKeyConfig,

    pub spk: Option<RsaKeyConfig>,
}

/// Load Key Configuration from file
pub(crate) fn load_key_config(path: &Path) -> anyhow::Result<KeyConfig> {
    let config_str = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read the config file {}", path.display()))?;

    let config: KeyConfig = toml::from_str(&config_str)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;

    Ok(config)
}
