/*++

Licensed under the Apache-2.0 license.

File Name:

    verifier.rs

Abstract:

    Image Verification support routines.

--*/

use fsbl_drivers::*;
use fsbl_error::FsblResult;
use fsbl_image_types::*;
use fsbl_image_verify::ImageVerificationEnv;

use crate::FsblEnv;

/// Boot loader Verification Environment
pub struct FsblImageVerificationEnv<'a, W: Watchdog> {
    sha256: &'a mut Sha256,
    rsa2048: &'a mut Rsa2048,
    wdt: &'a mut W,
}

impl<'a, W: Watchdog> FsblImageVerificationEnv<'a, W> {
    /// Create an instance `FsblImageVerificationEnv`
    pub fn new(env: &'a mut FsblEnv<W>) -> Self {
        Self {
            sha256: &mut env.sha256,
            rsa2048: &mut env.rsa2048,
            wdt: &mut env.wdt,
        }
    }
}

impl<'a, W: Watchdog> ImageVerificationEnv for FsblImageVerificationEnv<'a, W> {
    /// Calculate Digest using SHA-256 Engine
    fn sha256_digest(&mut self, data: &[u8]) -> FsblResult<ImageDigest> {
        self.sha256.digest(data)
    }

    /// RSA-2048 public key operation
    fn rsa2048_pubexp(
        &mut self,
        sig: &RsaNumber,
        exp: u32,
        modulus: &RsaNumber,
        modulus_ext: &RsaNumber,
    ) -> FsblResult<RsaNumber> {
        self.rsa2048.pubexp(sig, exp, modulus, modulus_ext)
    }

    fn restart_wdt(&mut self) {
        self.wdt.restart();
    }
}
