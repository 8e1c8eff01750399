/*++

Licensed under the Apache-2.0 license.

File Name:

   create.rs

Abstract:

    File contains implementation of the partition signing command.

--*/

use anyhow::{anyhow, Context};
use clap::ArgMatches;
use fsbl_image_crypto::RustCrypto;
use fsbl_image_gen::{AuthCertGenerator, AuthCertGeneratorConfig};
use std::path::{Path, PathBuf};

use crate::config::{load_key_config, KeyConfig};

/// Run the command
pub(crate) fn run_cmd(args: &ArgMatches) -> anyhow::Result<()> {
    let config_path: &PathBuf = args
        .get_one::<PathBuf>("key-config")
        .with_context(|| "key-config arg not specified")?;

    let partition_path: &PathBuf = args
        .get_one::<PathBuf>("partition")
        .with_context(|| "partition arg not specified")?;

    let out_path: &PathBuf = args
        .get_one::<PathBuf>("out")
        .with_context(|| "out arg not specified")?;

    let config = load_key_config(config_path)?;
    create(&config, partition_path, out_path)
}

pub(crate) fn create(
    config: &KeyConfig,
    partition_path: &Path,
    out_path: &Path,
) -> anyhow::Result<()> {
    let spk = config
        .spk
        .as_ref()
        .ok_or_else(|| anyhow!("SPK not specified in the key configuration"))?;

    let gen_config = AuthCertGeneratorConfig {
        ppk: config.ppk.pub_key().context("Invalid PPK")?,
        ppk_priv: *config.ppk.priv_key().context("Invalid PPK")?,
        spk: spk.pub_key().context("Invalid SPK")?,
        spk_priv: *spk.priv_key().context("Invalid SPK")?,
    };

    let partition = std::fs::read(partition_path)
        .with_context(|| format!("Failed to read partition {}", partition_path.display()))?;

    let image =
        AuthCertGenerator::new(RustCrypto::default()).sign_partition(&gen_config, &partition)?;

    std::fs::write(out_path, image)
        .with_context(|| format!("Failed to write signed partition {}", out_path.display()))?;

    Ok(())
}
