/*++

Licensed under the Apache-2.0 license.

File Name:

    authenticate.rs

Abstract:

    File contains the signed partition authentication flow.

--*/

use fsbl_drivers::{cprint_slice, cprintln, report_boot_status, Watchdog};
use fsbl_error::{FsblError, FsblResult};
use fsbl_image_types::*;
use fsbl_image_verify::{PartitionAuthenticator, TrustAnchor};

use crate::{FsblBootStatus::*, FsblEnv, FsblImageVerificationEnv};

/// Capture the PPK placed behind the boot loader image
///
/// # Arguments
///
/// * `anchor`   - Trust anchor to fill in
/// * `ocm`      - On-chip memory
/// * `fsbl_len` - Boot loader image length in bytes
pub fn capture_trust_anchor<'a>(anchor: &mut TrustAnchor<'a>, ocm: &'a [u8], fsbl_len: u32) {
    anchor.set_ppk(ocm, fsbl_len);
    if let Some(ppk) = anchor.ppk() {
        cprint_slice!("[fsbl] PPK modulus low bytes", &ppk.modulus()[..8]);
        report_boot_status(TrustAnchorCaptured.into());
    }
}

/// Digest signed by the partition signature: the partition data followed by
/// the certificate up to the partition signature.
///
/// # Arguments
///
/// * `env`   - Boot loader Environment
/// * `image` - Signed partition
pub fn partition_digest<W: Watchdog>(
    env: &mut FsblEnv<W>,
    image: &[u8],
) -> FsblResult<ImageDigest> {
    let (data, cert) = split(image)?;

    let mut op = env.sha256.digest_init()?;
    op.update(data)?;
    op.update(&cert[AuthCertificate::signed_range()])?;
    op.finalize()
}

/// Authenticate a signed partition
///
/// # Arguments
///
/// * `env`    - Boot loader Environment
/// * `anchor` - Captured PPK
/// * `image`  - Signed partition (`data | certificate`)
pub fn authenticate_partition<W: Watchdog>(
    env: &mut FsblEnv<W>,
    anchor: &TrustAnchor,
    image: &[u8],
) -> FsblResult<()> {
    report_boot_status(PartitionAuthStarted.into());

    let digest = partition_digest(env, image)?;
    let (_, cert) = split(image)?;

    let verify_env = FsblImageVerificationEnv::new(env);
    let mut authenticator = PartitionAuthenticator::new(verify_env, anchor);
    authenticator.authenticate(cert, &digest)?;

    cprintln!("[fsbl] Partition authentication passed");
    report_boot_status(PartitionAuthComplete.into());
    Ok(())
}

fn split(image: &[u8]) -> FsblResult<(&[u8], &[u8])> {
    let offset = image
        .len()
        .checked_sub(AUTH_CERT_BYTE_SIZE)
        .ok_or(FsblError::FSBL_PARTITION_IMAGE_TOO_SMALL)?;
    Ok(image.split_at(offset))
}
