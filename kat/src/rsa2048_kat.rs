/*++

Licensed under the Apache-2.0 license.

File Name:

    rsa2048_kat.rs

Abstract:

    File contains the Known Answer Tests (KAT) for RSA-2048 public key operations.

--*/

use fsbl_drivers::{Rsa2048, Rsa2048Number, Sha256, RSA2048_BYTE_SIZE};
use fsbl_error::{FsblError, FsblResult};
use fsbl_image_types::pkcs1_v15_encode;

const EXPONENT: u32 = 65537;

const MODULUS: Rsa2048Number = [
    0x45, 0x01, 0x28, 0xc6, 0xdd, 0x16, 0xa8, 0x5a, 0x68, 0xfb, 0xd7, 0xb2, 0xdd, 0x21, 0xc4, 0xc8,
    0x9d, 0x50, 0x14, 0x13, 0xe4, 0x80, 0xa3, 0x32, 0x12, 0x3c, 0xb5, 0x48, 0x09, 0x7b, 0x07, 0xd8,
    0x26, 0xc9, 0xc8, 0xd2, 0xbc, 0xa0, 0x9d, 0x69, 0xf8, 0x60, 0x13, 0xa4, 0x97, 0x84, 0x80, 0xf0,
    0x8b, 0x58, 0xf3, 0x2e, 0x2a, 0xd5, 0x19, 0x0e, 0x40, 0xf1, 0x54, 0xf2, 0x5d, 0xe8, 0xe9, 0x3a,
    0xbe, 0x92, 0xfc, 0x78, 0x1a, 0x49, 0xb5, 0xd3, 0xa7, 0xfd, 0xd6, 0x27, 0x68, 0x3b, 0x5b, 0x58,
    0xd6, 0x59, 0x37, 0x82, 0xf3, 0x55, 0x8a, 0x7b, 0x7d, 0x7a, 0x4a, 0x7f, 0x2b, 0x0d, 0xe1, 0xc8,
    0xfc, 0xf7, 0x6a, 0xde, 0xe6, 0x1e, 0x28, 0xf8, 0x6d, 0x8e, 0x63, 0x4e, 0x2b, 0x12, 0x0a, 0x2e,
    0x9a, 0x4f, 0x75, 0x8a, 0xd4, 0xb6, 0xcd, 0x83, 0x70, 0x30, 0x4c, 0x26, 0xba, 0x14, 0x3f, 0xb6,
    0xb0, 0x7c, 0x03, 0x63, 0x29, 0xda, 0xbc, 0x87, 0x2a, 0xb4, 0x5c, 0x74, 0xd8, 0x42, 0x0c, 0xe9,
    0xc5, 0x17, 0x24, 0x7c, 0x4b, 0x5f, 0xf9, 0xca, 0x7c, 0xe5, 0xa1, 0x05, 0xe0, 0xa7, 0x8a, 0x89,
    0xb8, 0x05, 0x53, 0x1d, 0x91, 0x50, 0xe4, 0xea, 0x56, 0x77, 0xee, 0xd6, 0x2e, 0xf2, 0x42, 0x16,
    0xb9, 0x3b, 0x33, 0x33, 0xbd, 0x09, 0x45, 0x8f, 0x27, 0xf0, 0x75, 0x85, 0x1e, 0x46, 0x75, 0x71,
    0xa4, 0x65, 0x14, 0x7f, 0xbd, 0xe4, 0xa3, 0xba, 0x13, 0xe0, 0x07, 0xf8, 0x7e, 0x7e, 0xcc, 0x3f,
    0xa2, 0x99, 0x4b, 0x11, 0x8b, 0xa3, 0x55, 0x34, 0x6f, 0x4e, 0x3c, 0x72, 0x3a, 0xf0, 0xc7, 0x55,
    0xfe, 0x32, 0x54, 0x4a, 0x4a, 0x29, 0x6e, 0x85, 0x92, 0x48, 0x7f, 0x5b, 0x66, 0xa4, 0x47, 0x2d,
    0x15, 0x3d, 0x92, 0x9e, 0x9d, 0x61, 0xc8, 0x82, 0xfc, 0xec, 0xac, 0xed, 0xcf, 0x0d, 0x55, 0xea,
];

const SIGNATURE: Rsa2048Number = [
    0xa8, 0x5d, 0xeb, 0xb0, 0xc0, 0x83, 0x24, 0x66, 0x7b, 0x62, 0xee, 0x7a, 0x1e, 0xaf, 0x43, 0x7e,
    0x70, 0xe4, 0x87, 0xe5, 0x35, 0xf8, 0xb7, 0x93, 0x6b, 0x68, 0x70, 0x4a, 0x9e, 0xb2, 0x1d, 0x49,
    0x6b, 0x6c, 0x79, 0x93, 0xf0, 0xf0, 0x46, 0xdd, 0xce, 0x48, 0x67, 0x57, 0x25, 0xaf, 0xe4, 0x52,
    0xb7, 0xe2, 0x69, 0x76, 0xe1, 0x54, 0xb0, 0xdb, 0x90, 0x4f, 0xce, 0x9f, 0x59, 0x79, 0xe9, 0x98,
    0xcd, 0xd5, 0xc1, 0x93, 0xbb, 0xdd, 0xc2, 0xc8, 0x21, 0x4a, 0xd4, 0x5d, 0x24, 0x0a, 0xb3, 0x88,
    0x77, 0xab, 0x8f, 0x8a, 0xc0, 0xcd, 0xc0, 0x8a, 0x2e, 0x5e, 0xfc, 0xf1, 0xf4, 0x1f, 0xc9, 0xf1,
    0x57, 0xba, 0x6c, 0xc9, 0xf1, 0x0e, 0x57, 0xfa, 0x80, 0x5f, 0x59, 0x2d, 0x3a, 0x96, 0x47, 0x2e,
    0xfa, 0xf8, 0x74, 0xbc, 0x2b, 0x7d, 0xdd, 0xe1, 0xc7, 0xed, 0xd2, 0x7f, 0x9c, 0x42, 0x57, 0x25,
    0xb4, 0x02, 0x0f, 0xfa, 0xd1, 0x22, 0x06, 0x5a, 0x7a, 0x6a, 0x00, 0x0e, 0x4b, 0x85, 0xd2, 0x42,
    0x28, 0x53, 0x80, 0xff, 0x34, 0x0e, 0xb0, 0x4e, 0x18, 0x96, 0xa7, 0xda, 0x36, 0xb6, 0x6f, 0x85,
    0x5c, 0x48, 0xe3, 0x93, 0xd4, 0x38, 0xe9, 0x94, 0xc9, 0xf9, 0xf5, 0x61, 0xd8, 0x6a, 0xb4, 0xdd,
    0x8e, 0x00, 0x9f, 0xab, 0xb1, 0xd6, 0xf2, 0x77, 0xdc, 0x56, 0xbd, 0x28, 0xa5, 0xdd, 0x83, 0x5a,
    0xfa, 0xe1, 0xf6, 0x3b, 0x02, 0x2f, 0xf9, 0xe4, 0x95, 0x19, 0x0f, 0x5e, 0x79, 0x7a, 0x82, 0xd4,
    0xa5, 0x7b, 0xbd, 0x03, 0x5a, 0xd8, 0x69, 0xeb, 0xf3, 0x01, 0xf2, 0x79, 0x21, 0x9f, 0x3c, 0x40,
    0x86, 0x88, 0xc3, 0x42, 0x57, 0xf8, 0x57, 0x14, 0xcf, 0x99, 0xe2, 0xad, 0xdc, 0xd4, 0xc8, 0xe7,
    0xad, 0x56, 0x89, 0xcc, 0xcf, 0xa2, 0x02, 0xa5, 0x9e, 0x81, 0xf1, 0x86, 0xd8, 0xff, 0x4d, 0x72,
];

#[derive(Default, Debug)]
pub struct Rsa2048Kat {}

impl Rsa2048Kat {
    /// This function executes the Known Answer Tests (aka KAT) for RSA-2048.
    ///
    /// Test vector source:
    /// PKCS#1-v1.5 signature over SHA-256("abc"), generated offline.
    ///
    /// # Arguments
    ///
    /// * `rsa` - RSA-2048 Driver
    /// * `sha` - SHA2-256 Driver
    ///
    /// # Returns
    ///
    /// * `FsblResult` - Result denoting the KAT outcome.
    pub fn execute(&self, rsa: &mut Rsa2048, sha: &mut Sha256) -> FsblResult<()> {
        let digest = sha
            .digest(b"abc")
            .map_err(|_| FsblError::KAT_RSA2048_PUBEXP_FAILURE)?;
        self.kat_pubexp(rsa, &SIGNATURE, &pkcs1_v15_encode(&digest))
    }

    fn kat_pubexp(
        &self,
        rsa: &mut Rsa2048,
        sig: &Rsa2048Number,
        expected: &Rsa2048Number,
    ) -> FsblResult<()> {
        // The engine ignores the modulus extension
        let result = rsa
            .pubexp(sig, EXPONENT, &MODULUS, &[0u8; RSA2048_BYTE_SIZE])
            .map_err(|_| FsblError::KAT_RSA2048_PUBEXP_FAILURE)?;

        if result != *expected {
            Err(FsblError::KAT_RSA2048_PUBEXP_MISMATCH)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kat() {
        assert_eq!(
            Rsa2048Kat::default().execute(&mut Rsa2048::default(), &mut Sha256::default()),
            Ok(())
        );
    }

    #[test]
    fn test_kat_mismatch() {
        let mut sig = SIGNATURE;
        sig[0] ^= 1;
        let expected = pkcs1_v15_encode(&Sha256::default().digest(b"abc").unwrap());
        assert_eq!(
            Rsa2048Kat::default().kat_pubexp(&mut Rsa2048::default(), &sig, &expected),
            Err(FsblError::KAT_RSA2048_PUBEXP_MISMATCH)
        );
    }
}
