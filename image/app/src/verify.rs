/*++

Licensed under the Apache-2.0 license.

File Name:

   verify.rs

Abstract:

    File contains implementation of the signed partition verification command.

--*/

use anyhow::{anyhow, bail, Context};
use clap::ArgMatches;
use fsbl::{flow, FsblEnv};
use fsbl_drivers::NoWatchdog;
use fsbl_image_gen::BootImageBuilder;
use fsbl_image_verify::TrustAnchor;
use std::path::PathBuf;

use crate::config::load_key_config;

/// Run the command
pub(crate) fn run_cmd(args: &ArgMatches) -> anyhow::Result<()> {
    let image_path: &PathBuf = args
        .get_one::<PathBuf>("image")
        .with_context(|| "image arg not specified")?;

    let (ocm, fsbl_len) = match args.get_one::<PathBuf>("boot-image") {
        Some(path) => {
            let ocm = std::fs::read(path)
                .with_context(|| format!("Failed to read boot image {}", path.display()))?;
            let fsbl_len = *args
                .get_one::<u32>("fsbl-len")
                .with_context(|| "fsbl-len arg not specified")?;
            (ocm, fsbl_len)
        }
        None => {
            let config_path = args
                .get_one::<PathBuf>("key-config")
                .with_context(|| "Either key-config or boot-image must be specified")?;
            let ppk = load_key_config(config_path)?.ppk.pub_key()?;
            (BootImageBuilder::new(&[]).ppk(ppk).build()?, 0)
        }
    };

    let image = std::fs::read(image_path)
        .with_context(|| format!("Failed to read signed partition {}", image_path.display()))?;

    verify(&ocm, fsbl_len, &image)?;
    println!("{}: authentication passed", image_path.display());
    Ok(())
}

pub(crate) fn verify(ocm: &[u8], fsbl_len: u32, image: &[u8]) -> anyhow::Result<()> {
    let mut anchor = TrustAnchor::new();
    flow::capture_trust_anchor(&mut anchor, ocm, fsbl_len);
    if !anchor.is_set() {
        bail!("No PPK found behind a boot loader of {fsbl_len} bytes");
    }

    let mut env = FsblEnv::<NoWatchdog>::default();
    flow::authenticate_partition(&mut env, &anchor, image)
        .map_err(|err| anyhow!("Authentication failed: error 0x{:08x}", u32::from(err)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{tests::fake_key_config, KeyConfig};
    use fsbl_image_fake_keys::*;

    #[test]
    fn test_create_then_verify() {
        let dir = tempfile::tempdir().unwrap();
        let partition_path = dir.path().join("partition.bin");
        let out_path = dir.path().join("partition.signed");
        std::fs::write(&partition_path, b"application").unwrap();

        let config: KeyConfig = toml::from_str(&fake_key_config()).unwrap();
        crate::create::create(&config, &partition_path, &out_path).unwrap();

        let image = std::fs::read(&out_path).unwrap();
        let ocm = BootImageBuilder::new(&[0u8; 100])
            .ppk(PPK_PUBLIC)
            .build()
            .unwrap();
        verify(&ocm, 100, &image).unwrap();

        let ocm = BootImageBuilder::new(&[0u8; 100])
            .ppk(PPK_ALT_PUBLIC)
            .build()
            .unwrap();
        let err = verify(&ocm, 100, &image).unwrap_err();
        assert!(err.to_string().contains("0x000b0003"));
    }

    #[test]
    fn test_missing_anchor() {
        assert!(verify(&[0u8; 16], 0, &[0u8; 4096]).is_err());
    }
}
