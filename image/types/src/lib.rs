/*++

Licensed under the Apache-2.0 license.

File Name:

   lib.rs

Abstract:

    File contains data structures for the partition authentication certificate.

--*/

#![cfg_attr(not(feature = "std"), no_std)]

use core::ops::Range;

use getset::{Getters, Setters};
use memoffset::span_of;
use zerocopy::{AsBytes, FromBytes};
use zeroize::Zeroize;

pub const RSA2048_BYTE_SIZE: usize = 256;
pub const RSA_MODULUS_BYTE_SIZE: usize = RSA2048_BYTE_SIZE;
pub const RSA_MODULUS_EXT_BYTE_SIZE: usize = RSA2048_BYTE_SIZE;
pub const RSA_EXPONENT_FIELD_BYTE_SIZE: usize = 64;
pub const RSA_SIGNATURE_BYTE_SIZE: usize = RSA2048_BYTE_SIZE;
pub const RSA_PUB_KEY_BYTE_SIZE: usize =
    RSA_MODULUS_BYTE_SIZE + RSA_MODULUS_EXT_BYTE_SIZE + RSA_EXPONENT_FIELD_BYTE_SIZE;

pub const AUTH_CERT_HEADER_BYTE_SIZE: usize = 4;
pub const AUTH_CERT_MAGIC_BYTE_SIZE: usize = 60;
pub const AUTH_CERT_BYTE_SIZE: usize = 0x6C0;

/// Authentication certificate header word written by the signer
pub const AUTH_CERT_HEADER: u32 = 0x0101_0000;

/// Boundary the PPK block is aligned to behind the boot loader image
pub const PPK_ALIGNMENT: u32 = 64;

pub const SHA256_DIGEST_BYTE_SIZE: usize = 32;

/// ASN.1 DigestInfo prefix identifying SHA-256
pub const PKCS1_DIGEST_INFO_SHA256: [u8; 19] = [
    0x30, 0x31, 0x30, 0x0D, 0x06, 0x09, 0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02, 0x01, 0x05,
    0x00, 0x04, 0x20,
];

/// Number of 0xFF bytes in a PKCS#1-v1.5 block carrying a SHA-256 digest
pub const PKCS1_PS_BYTE_SIZE: usize =
    RSA2048_BYTE_SIZE - 3 - PKCS1_DIGEST_INFO_SHA256.len() - SHA256_DIGEST_BYTE_SIZE;

/// 2048-bit operand, least significant byte first
pub type RsaNumber = [u8; RSA2048_BYTE_SIZE];
pub type ImageDigest = [u8; SHA256_DIGEST_BYTE_SIZE];
pub type RsaExponentField = [u8; RSA_EXPONENT_FIELD_BYTE_SIZE];

/// Encode a public exponent into its 64-byte certificate field
pub const fn rsa_exponent_field(exponent: u32) -> RsaExponentField {
    let bytes = exponent.to_le_bytes();
    let mut field = [0u8; RSA_EXPONENT_FIELD_BYTE_SIZE];
    field[0] = bytes[0];
    field[1] = bytes[1];
    field[2] = bytes[2];
    field[3] = bytes[3];
    field
}

/// Build the PKCS#1-v1.5 signature block for `digest`.
///
/// The block is `00 01 FF..FF 00 DigestInfo digest` read from the most
/// significant byte. It is returned in operand byte order, so the last
/// element is the leading `0x00`.
pub fn pkcs1_v15_encode(digest: &ImageDigest) -> RsaNumber {
    const DI_START: usize = 3 + PKCS1_PS_BYTE_SIZE;
    const DIGEST_START: usize = DI_START + PKCS1_DIGEST_INFO_SHA256.len();

    let mut block = [0u8; RSA2048_BYTE_SIZE];
    block[1] = 0x01;
    block[2..2 + PKCS1_PS_BYTE_SIZE].fill(0xFF);
    block[DI_START..DIGEST_START].copy_from_slice(&PKCS1_DIGEST_INFO_SHA256);
    block[DIGEST_START..].copy_from_slice(digest);
    block.reverse();
    block
}

/// RSA-2048 public key block as laid out in the certificate
#[repr(C)]
#[derive(AsBytes, FromBytes, Debug, Getters, Setters, Copy, Clone, Eq, PartialEq)]
pub struct ImageRsaPubKey {
    /// Modulus
    #[getset(get = "pub", set = "pub")]
    pub modulus: RsaNumber,

    /// Montgomery helper, R^2 mod N
    #[getset(get = "pub", set = "pub")]
    pub modulus_ext: RsaNumber,

    /// Public exponent, little-endian in the first four bytes
    #[getset(get = "pub", set = "pub")]
    pub exponent: RsaExponentField,
}

impl Default for ImageRsaPubKey {
    fn default() -> Self {
        Self::new_zeroed()
    }
}

impl ImageRsaPubKey {
    /// Public exponent value
    pub fn exponent_value(&self) -> u32 {
        u32::from_le_bytes([
            self.exponent[0],
            self.exponent[1],
            self.exponent[2],
            self.exponent[3],
        ])
    }
}

/// RSA-2048 private key material. Only the signer ever handles this.
#[derive(Debug, Getters, Setters, Copy, Clone, Eq, PartialEq, Zeroize)]
pub struct ImageRsaPrivKey {
    /// Modulus
    #[getset(get = "pub", set = "pub")]
    pub modulus: RsaNumber,

    /// Private exponent
    #[getset(get = "pub", set = "pub")]
    pub priv_exponent: RsaNumber,
}

/// Partition authentication certificate
#[repr(C)]
#[derive(AsBytes, FromBytes, Debug, Getters, Setters, Copy, Clone, Eq, PartialEq)]
pub struct AuthCertificate {
    /// Header word
    #[getset(get = "pub", set = "pub")]
    pub header: [u8; AUTH_CERT_HEADER_BYTE_SIZE],

    /// Magic word
    #[getset(get = "pub", set = "pub")]
    pub magic: [u8; AUTH_CERT_MAGIC_BYTE_SIZE],

    /// Primary Platform Key
    #[getset(get = "pub", set = "pub")]
    pub ppk: ImageRsaPubKey,

    /// Secondary Platform Key
    #[getset(get = "pub", set = "pub")]
    pub spk: ImageRsaPubKey,

    /// SPK block signed with the PPK
    #[getset(get = "pub", set = "pub")]
    pub spk_sig: RsaNumber,

    /// Partition signed with the SPK
    #[getset(get = "pub", set = "pub")]
    pub partition_sig: RsaNumber,
}

const _: () = assert!(core::mem::size_of::<ImageRsaPubKey>() == RSA_PUB_KEY_BYTE_SIZE);
const _: () = assert!(core::mem::size_of::<AuthCertificate>() == AUTH_CERT_BYTE_SIZE);

impl Default for AuthCertificate {
    fn default() -> Self {
        let mut cert = Self::new_zeroed();
        cert.header = AUTH_CERT_HEADER.to_le_bytes();
        cert
    }
}

impl AuthCertificate {
    /// Returns the `Range<usize>` containing the PPK block
    pub fn ppk_range() -> Range<usize> {
        span_of!(AuthCertificate, ppk)
    }

    /// Returns the `Range<usize>` containing the SPK block covered by the SPK signature
    pub fn spk_range() -> Range<usize> {
        span_of!(AuthCertificate, spk)
    }

    /// Returns the `Range<usize>` containing the SPK signature
    pub fn spk_sig_range() -> Range<usize> {
        span_of!(AuthCertificate, spk_sig)
    }

    /// Returns the `Range<usize>` containing the partition signature
    pub fn partition_sig_range() -> Range<usize> {
        span_of!(AuthCertificate, partition_sig)
    }

    /// Returns the `Range<usize>` of the certificate covered by the partition signature
    pub fn signed_range() -> Range<usize> {
        span_of!(AuthCertificate, header..partition_sig)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cert_layout() {
        assert_eq!(AuthCertificate::ppk_range(), 0x040..0x280);
        assert_eq!(AuthCertificate::spk_range(), 0x280..0x4C0);
        assert_eq!(AuthCertificate::spk_sig_range(), 0x4C0..0x5C0);
        assert_eq!(AuthCertificate::partition_sig_range(), 0x5C0..0x6C0);
        assert_eq!(AuthCertificate::signed_range(), 0..0x5C0);
    }

    #[test]
    fn test_ps_size() {
        assert_eq!(PKCS1_PS_BYTE_SIZE, 202);
    }

    #[test]
    fn test_pkcs1_encode_zero_digest() {
        let block = pkcs1_v15_encode(&[0u8; SHA256_DIGEST_BYTE_SIZE]);
        let mut expected = vec![0x00, 0x01];
        expected.extend_from_slice(&[0xFF; 202]);
        expected.push(0x00);
        expected.extend_from_slice(&PKCS1_DIGEST_INFO_SHA256);
        expected.extend_from_slice(&[0u8; 32]);
        expected.reverse();
        assert_eq!(&block[..], &expected[..]);
    }

    #[test]
    fn test_pkcs1_encode_digest_position() {
        let mut digest = [0u8; SHA256_DIGEST_BYTE_SIZE];
        for (i, b) in digest.iter_mut().enumerate() {
            *b = i as u8 + 1;
        }
        let block = pkcs1_v15_encode(&digest);
        for (i, b) in digest.iter().enumerate() {
            assert_eq!(block[31 - i], *b);
        }
        assert_eq!(block[32], PKCS1_DIGEST_INFO_SHA256[18]);
        assert_eq!(block[50], PKCS1_DIGEST_INFO_SHA256[0]);
        assert_eq!(block[51], 0x00);
        assert_eq!(block[254], 0x01);
        assert_eq!(block[255], 0x00);
    }

    #[test]
    fn test_exponent_field() {
        let key = ImageRsaPubKey {
            exponent: rsa_exponent_field(65537),
            ..Default::default()
        };
        assert_eq!(&key.exponent[..4], &[0x01, 0x00, 0x01, 0x00]);
        assert!(key.exponent[4..].iter().all(|b| *b == 0));
        assert_eq!(key.exponent_value(), 65537);
    }

    #[test]
    fn test_default_header() {
        let cert = AuthCertificate::default();
        assert_eq!(u32::from_le_bytes(cert.header), AUTH_CERT_HEADER);
        assert_eq!(cert.as_bytes().len(), AUTH_CERT_BYTE_SIZE);
    }
}
