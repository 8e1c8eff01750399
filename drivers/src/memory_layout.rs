/*++
Licensed under the Apache-2.0 license.

File Name:

    memory_layout.rs

Abstract:

    The file contains the layout of on-chip memory as seen by the boot loader.

--*/

//
// Memory Addresses
//
pub const OCM_ORG: u32 = 0x00000000;

//
// Memory Sizes In Bytes
//
pub const OCM_SIZE: u32 = 256 * 1024;

/// Largest boot loader image the boot ROM will copy into OCM
pub const FSBL_MAX_SIZE: u32 = 192 * 1024;

#[test]
#[allow(clippy::assertions_on_constants)]
fn mem_layout_test_fsbl() {
    assert!(FSBL_MAX_SIZE < OCM_SIZE);
    assert_eq!(OCM_ORG % 64, 0);
}
