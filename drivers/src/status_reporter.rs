/*++

Licensed under the Apache-2.0 license.

File Name:

    status_reporter.rs

Abstract:

    File contains API for reporting boot status.

--*/

use core::sync::atomic::{AtomicU32, Ordering};

static BOOT_STATUS: AtomicU32 = AtomicU32::new(0);

/// Report boot status
///
/// # Arguments
///
/// * `val` - Boot status code.
pub fn report_boot_status(val: u32) {
    BOOT_STATUS.store(val, Ordering::Relaxed);
}

/// Last reported boot status
pub fn boot_status() -> u32 {
    BOOT_STATUS.load(Ordering::Relaxed)
}
