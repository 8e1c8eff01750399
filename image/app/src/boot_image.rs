/*++

Licensed under the Apache-2.0 license.

File Name:

   boot_image.rs

Abstract:

    File contains implementation of the boot image command.

--*/

use anyhow::Context;
use clap::ArgMatches;
use fsbl_image_gen::BootImageBuilder;
use std::path::PathBuf;

use crate::config::load_key_config;

/// Run the command
pub(crate) fn run_cmd(args: &ArgMatches) -> anyhow::Result<()> {
    let config_path: &PathBuf = args
        .get_one::<PathBuf>("key-config")
        .with_context(|| "key-config arg not specified")?;

    let fsbl_path: &PathBuf = args
        .get_one::<PathBuf>("fsbl")
        .with_context(|| "fsbl arg not specified")?;

    let out_path: &PathBuf = args
        .get_one::<PathBuf>("out")
        .with_context(|| "out arg not specified")?;

    let config = load_key_config(config_path)?;
    let fsbl = std::fs::read(fsbl_path)
        .with_context(|| format!("Failed to read boot loader {}", fsbl_path.display()))?;

    let image = BootImageBuilder::new(&fsbl)
        .ppk(config.ppk.pub_key().context("Invalid PPK")?)
        .build()?;

    std::fs::write(out_path, image)
        .with_context(|| format!("Failed to write boot image {}", out_path.display()))?;

    Ok(())
}
