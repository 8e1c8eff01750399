/*++

Licensed under the Apache-2.0 license.

File Name:

    sha256_kat.rs

Abstract:

    File contains the Known Answer Tests (KAT) for SHA-256 cryptography operations.

--*/

use fsbl_drivers::{Sha256, Sha256Digest};
use fsbl_error::{FsblError, FsblResult};

const EXPECTED_NO_DATA: Sha256Digest = [
    0xe3, 0xb0, 0xc4, 0x42, 0x98, 0xfc, 0x1c, 0x14, 0x9a, 0xfb, 0xf4, 0xc8, 0x99, 0x6f, 0xb9, 0x24,
    0x27, 0xae, 0x41, 0xe4, 0x64, 0x9b, 0x93, 0x4c, 0xa4, 0x95, 0x99, 0x1b, 0x78, 0x52, 0xb8, 0x55,
];

const EXPECTED_ABC: Sha256Digest = [
    0xba, 0x78, 0x16, 0xbf, 0x8f, 0x01, 0xcf, 0xea, 0x41, 0x41, 0x40, 0xde, 0x5d, 0xae, 0x22, 0x23,
    0xb0, 0x03, 0x61, 0xa3, 0x96, 0x17, 0x7a, 0x9c, 0xb4, 0x10, 0xff, 0x61, 0xf2, 0x00, 0x15, 0xad,
];

#[derive(Default, Debug)]
pub struct Sha256Kat {}

impl Sha256Kat {
    /// This function executes the Known Answer Tests (aka KAT) for SHA256.
    ///
    /// Test vector source:
    /// FIPS 180-2 Appendix B.1 and the empty message digest.
    ///
    /// # Arguments
    ///
    /// * `sha` - SHA2-256 Driver
    ///
    /// # Returns
    ///
    /// * `FsblResult` - Result denoting the KAT outcome.
    pub fn execute(&self, sha: &mut Sha256) -> FsblResult<()> {
        self.kat(sha, &[], &EXPECTED_NO_DATA)?;
        self.kat(sha, b"abc", &EXPECTED_ABC)
    }

    fn kat(&self, sha: &mut Sha256, data: &[u8], expected: &Sha256Digest) -> FsblResult<()> {
        let digest = sha
            .digest(data)
            .map_err(|_| FsblError::KAT_SHA256_DIGEST_FAILURE)?;

        if digest != *expected {
            Err(FsblError::KAT_SHA256_DIGEST_MISMATCH)?;
        }

        Ok(())
    }
}
