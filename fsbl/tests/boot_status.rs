// Licensed under the Apache-2.0 license

use fsbl::{flow, FsblBootStatus, FsblEnv};
use fsbl_drivers::{boot_status, NoWatchdog};
use fsbl_image_crypto::RustCrypto;
use fsbl_image_fake_keys::*;
use fsbl_image_gen::*;
use fsbl_image_verify::TrustAnchor;

// Boot status is process wide, so this binary holds a single test.
#[test]
fn test_boot_status_progress() {
    let fsbl = [0u8; 256];
    let ocm = BootImageBuilder::new(&fsbl).ppk(PPK_PUBLIC).build().unwrap();
    let mut env = FsblEnv::<NoWatchdog>::default();

    fsbl::execute_kat(&mut env).unwrap();
    assert_eq!(boot_status(), u32::from(FsblBootStatus::KatComplete));

    let mut anchor = TrustAnchor::new();
    flow::capture_trust_anchor(&mut anchor, &ocm, fsbl.len() as u32);
    assert_eq!(boot_status(), u32::from(FsblBootStatus::TrustAnchorCaptured));

    let config = AuthCertGeneratorConfig {
        ppk: PPK_PUBLIC,
        ppk_priv: PPK_PRIVATE,
        spk: SPK_PUBLIC,
        spk_priv: SPK_PRIVATE,
    };
    let mut image = AuthCertGenerator::new(RustCrypto::default())
        .sign_partition(&config, b"partition")
        .unwrap();
    flow::authenticate_partition(&mut env, &anchor, &image).unwrap();
    assert_eq!(
        boot_status(),
        u32::from(FsblBootStatus::PartitionAuthComplete)
    );

    // A failed authentication stays at the started status
    image[0] ^= 0x01;
    assert!(flow::authenticate_partition(&mut env, &anchor, &image).is_err());
    assert_eq!(
        boot_status(),
        u32::from(FsblBootStatus::PartitionAuthStarted)
    );
}
