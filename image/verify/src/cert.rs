/*++

Licensed under the Apache-2.0 license.

File Name:

    cert.rs

Abstract:

    Borrowed views over RSA key blocks and authentication certificates.

--*/

use crate::reader::ByteReader;
use fsbl_error::{FsblError, FsblResult};
use fsbl_image_types::*;

/// RSA public key block borrowed from a certificate or on-chip memory
#[derive(Debug, Clone, Copy)]
pub struct RsaPubKeyView<'a> {
    modulus: &'a RsaNumber,
    modulus_ext: &'a RsaNumber,
    exponent: u32,

    /// Whole block, including the reserved tail of the exponent field
    block: &'a [u8],
}

impl<'a> RsaPubKeyView<'a> {
    /// Read a key block at the reader's cursor
    pub fn read(reader: &mut ByteReader<'a>) -> FsblResult<Self> {
        let block = reader.read_bytes(RSA_PUB_KEY_BYTE_SIZE)?;

        let mut fields = ByteReader::new(block);
        let modulus = fields.read_array::<RSA_MODULUS_BYTE_SIZE>()?;
        let modulus_ext = fields.read_array::<RSA_MODULUS_EXT_BYTE_SIZE>()?;
        let exponent = fields.read_u32()?;

        Ok(Self {
            modulus,
            modulus_ext,
            exponent,
            block,
        })
    }

    pub fn modulus(&self) -> &'a RsaNumber {
        self.modulus
    }

    pub fn modulus_ext(&self) -> &'a RsaNumber {
        self.modulus_ext
    }

    pub fn exponent(&self) -> u32 {
        self.exponent
    }

    /// Raw bytes of the key block
    pub fn as_bytes(&self) -> &'a [u8] {
        self.block
    }
}

/// Authentication certificate attached to a partition.
///
/// Only the first `AUTH_CERT_BYTE_SIZE` bytes of the buffer are used. The
/// PPK copy carried in the certificate is skipped; the SPK is vouched for by
/// the PPK captured from on-chip memory instead.
#[derive(Debug, Clone, Copy)]
pub struct AuthCertView<'a> {
    spk: RsaPubKeyView<'a>,
    spk_sig: &'a RsaNumber,
    partition_sig: &'a RsaNumber,
}

impl<'a> AuthCertView<'a> {
    /// Parse an authentication certificate
    ///
    /// # Arguments
    ///
    /// * `cert` - Certificate bytes
    pub fn parse(cert: &'a [u8]) -> FsblResult<Self> {
        if cert.len() < AUTH_CERT_BYTE_SIZE {
            return Err(FsblError::IMAGE_VERIFIER_ERR_AUTH_CERT_TRUNCATED);
        }

        let mut reader = ByteReader::new(cert);
        reader.skip(AUTH_CERT_HEADER_BYTE_SIZE)?;
        reader.skip(AUTH_CERT_MAGIC_BYTE_SIZE)?;
        reader.skip(RSA_PUB_KEY_BYTE_SIZE)?;

        let spk = RsaPubKeyView::read(&mut reader)?;
        let spk_sig = reader.read_array::<RSA_SIGNATURE_BYTE_SIZE>()?;
        let partition_sig = reader.read_array::<RSA_SIGNATURE_BYTE_SIZE>()?;

        Ok(Self {
            spk,
            spk_sig,
            partition_sig,
        })
    }

    pub fn spk(&self) -> &RsaPubKeyView<'a> {
        &self.spk
    }

    pub fn spk_sig(&self) -> &'a RsaNumber {
        self.spk_sig
    }

    pub fn partition_sig(&self) -> &'a RsaNumber {
        self.partition_sig
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zerocopy::AsBytes;

    fn sample_cert() -> AuthCertificate {
        let mut cert = AuthCertificate::default();
        cert.ppk.modulus = [0x11; RSA_MODULUS_BYTE_SIZE];
        cert.spk.modulus = [0x22; RSA_MODULUS_BYTE_SIZE];
        cert.spk.modulus_ext = [0x33; RSA_MODULUS_EXT_BYTE_SIZE];
        cert.spk.exponent = rsa_exponent_field(0x0001_0001);
        cert.spk.exponent[RSA_EXPONENT_FIELD_BYTE_SIZE - 1] = 0x44;
        cert.spk_sig = [0x55; RSA_SIGNATURE_BYTE_SIZE];
        cert.partition_sig = [0x66; RSA_SIGNATURE_BYTE_SIZE];
        cert
    }

    #[test]
    fn test_parse_matches_layout() {
        let cert = sample_cert();
        let bytes = cert.as_bytes();
        let view = AuthCertView::parse(bytes).unwrap();

        assert_eq!(view.spk().modulus(), &cert.spk.modulus);
        assert_eq!(view.spk().modulus_ext(), &cert.spk.modulus_ext);
        assert_eq!(view.spk().exponent(), 0x0001_0001);
        assert_eq!(view.spk().as_bytes(), &bytes[AuthCertificate::spk_range()]);
        assert_eq!(&view.spk_sig()[..], &bytes[AuthCertificate::spk_sig_range()]);
        assert_eq!(
            &view.partition_sig()[..],
            &bytes[AuthCertificate::partition_sig_range()]
        );
    }

    #[test]
    fn test_parse_truncated() {
        let cert = sample_cert();
        let bytes = cert.as_bytes();
        assert_eq!(
            AuthCertView::parse(&bytes[..AUTH_CERT_BYTE_SIZE - 1]).err(),
            Some(FsblError::IMAGE_VERIFIER_ERR_AUTH_CERT_TRUNCATED)
        );
        assert!(AuthCertView::parse(&[]).is_err());
    }

    #[test]
    fn test_parse_ignores_trailing_bytes() {
        let cert = sample_cert();
        let mut bytes = cert.as_bytes().to_vec();
        bytes.extend_from_slice(&[0xEE; 16]);
        let view = AuthCertView::parse(&bytes).unwrap();
        assert_eq!(view.partition_sig(), &cert.partition_sig);
    }
}
