/*++

Licensed under the Apache-2.0 license.

File Name:

   lib.rs

Abstract:

    Partition authentication library.

--*/
#![cfg_attr(not(feature = "std"), no_std)]

mod cert;
mod padding;
mod reader;
mod trust_anchor;
mod verifier;

use fsbl_error::FsblResult;
use fsbl_image_types::*;

pub use cert::{AuthCertView, RsaPubKeyView};
pub use padding::check_padding;
pub use reader::ByteReader;
pub use trust_anchor::TrustAnchor;
pub use verifier::PartitionAuthenticator;

/// Image Verification Environment
pub trait ImageVerificationEnv {
    /// Calculate SHA-256 Digest
    fn sha256_digest(&mut self, data: &[u8]) -> FsblResult<ImageDigest>;

    /// Perform the RSA-2048 public key operation `sig ^ exp mod modulus`
    fn rsa2048_pubexp(
        &mut self,
        sig: &RsaNumber,
        exp: u32,
        modulus: &RsaNumber,
        modulus_ext: &RsaNumber,
    ) -> FsblResult<RsaNumber>;

    /// Restart the watchdog
    fn restart_wdt(&mut self);
}
