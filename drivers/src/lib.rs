/*++

Licensed under the Apache-2.0 license.

File Name:

    lib.rs

Abstract:

    File contains exports for the boot loader drivers.

--*/

#![cfg_attr(not(feature = "std"), no_std)]

pub mod memory_layout;
pub mod printer;
mod rsa2048;
mod sha256;
mod status_reporter;
mod wdt;

pub use fsbl_error::{FsblError, FsblResult};
pub use rsa2048::{to_rsa2048_number, Rsa2048, Rsa2048Number, RSA2048_BYTE_SIZE};
pub use sha256::{Sha256, Sha256Digest, Sha256DigestOp, SHA256_DIGEST_BYTE_SIZE};
pub use status_reporter::{boot_status, report_boot_status};
pub use wdt::{NoWatchdog, Watchdog};
