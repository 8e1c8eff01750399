/*++

Licensed under the Apache-2.0 license.

File Name:

    boot_status.rs

Abstract:

    Boot loader boot status codes.

--*/

const KAT_BOOT_STATUS_BASE: u32 = 1;
const AUTH_BOOT_STATUS_BASE: u32 = 65;

/// Statuses used by the boot loader to log secure boot progress.
#[repr(u32)]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FsblBootStatus {
    // KAT Statuses
    KatStarted = KAT_BOOT_STATUS_BASE,
    KatComplete = KAT_BOOT_STATUS_BASE + 1,

    // Authentication Statuses
    TrustAnchorCaptured = AUTH_BOOT_STATUS_BASE,
    PartitionAuthStarted = AUTH_BOOT_STATUS_BASE + 1,
    PartitionAuthComplete = AUTH_BOOT_STATUS_BASE + 2,
}

impl From<FsblBootStatus> for u32 {
    /// Converts to this type from the input type.
    fn from(status: FsblBootStatus) -> u32 {
        status as u32
    }
}
