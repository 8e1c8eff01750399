/*++

Licensed under the Apache-2.0 license.

File Name:

    kat.rs

Abstract:

    File contains execution routines for the Known Answer Tests (KATs).

--*/

use fsbl_drivers::{cprintln, report_boot_status, Watchdog};
use fsbl_error::FsblResult;
use fsbl_kat::KatsEnv;

use crate::{FsblBootStatus::*, FsblEnv};

/// Execute Known Answer Tests
///
/// # Arguments
///
/// * `env` - Boot loader Environment
pub fn execute_kat<W: Watchdog>(env: &mut FsblEnv<W>) -> FsblResult<()> {
    cprintln!("[kat] ++");
    report_boot_status(KatStarted.into());

    let mut kats_env = KatsEnv {
        sha256: &mut env.sha256,
        rsa2048: &mut env.rsa2048,
    };
    fsbl_kat::execute_kat(&mut kats_env)?;

    report_boot_status(KatComplete.into());
    cprintln!("[kat] --");
    Ok(())
}
