/*++

Licensed under the Apache-2.0 license.

File Name:

    mod.rs

Abstract:

    File contains the top level boot loader secure boot flow.

--*/

mod authenticate;

pub use authenticate::{authenticate_partition, capture_trust_anchor, partition_digest};

use fsbl_drivers::{cprintln, Watchdog};
use fsbl_error::FsblResult;
use fsbl_image_verify::TrustAnchor;

use crate::FsblEnv;

/// Run the secure boot flow over a set of signed partitions
///
/// Known answer tests run first. The PPK is captured from on-chip memory
/// once, then every partition is authenticated in order. The first failure
/// stops the flow.
///
/// # Arguments
///
/// * `env`        - Boot loader Environment
/// * `ocm`        - On-chip memory holding the boot loader and the PPK
/// * `fsbl_len`   - Boot loader image length in bytes
/// * `partitions` - Signed partitions (`data | certificate`)
pub fn run<W: Watchdog>(
    env: &mut FsblEnv<W>,
    ocm: &[u8],
    fsbl_len: u32,
    partitions: &[&[u8]],
) -> FsblResult<()> {
    cprintln!("[fsbl] ++");

    crate::execute_kat(env)?;

    let mut anchor = TrustAnchor::new();
    capture_trust_anchor(&mut anchor, ocm, fsbl_len);

    for (idx, partition) in partitions.iter().enumerate() {
        cprintln!("[fsbl] Authenticating partition {}", idx);
        authenticate_partition(env, &anchor, partition)?;
    }

    cprintln!("[fsbl] --");
    Ok(())
}
