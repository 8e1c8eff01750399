/*++

Licensed under the Apache-2.0 license.

File Name:

    trust_anchor.rs

Abstract:

    Capture of the Primary Platform Key placed behind the boot loader image.

--*/

use crate::{reader::ByteReader, RsaPubKeyView};
use fsbl_drivers::{cprintln, memory_layout::OCM_ORG};
use fsbl_error::{FsblError, FsblResult};
use fsbl_image_types::*;

/// Primary Platform Key, captured once per boot from on-chip memory
#[derive(Debug, Default, Clone, Copy)]
pub struct TrustAnchor<'a> {
    ppk: Option<RsaPubKeyView<'a>>,

    /// Set by the first `set_ppk` call, whether or not it found a PPK
    attempted: bool,
}

impl<'a> TrustAnchor<'a> {
    pub const fn new() -> Self {
        Self {
            ppk: None,
            attempted: false,
        }
    }

    /// Capture the PPK. Only the first call scans on-chip memory; every
    /// later call does nothing, even if the first one found no PPK.
    ///
    /// The PPK block sits at the first 64-byte boundary after the boot
    /// loader image, behind the certificate header and magic word. A missing
    /// anchor is not an error here; authentication fails later instead.
    ///
    /// # Arguments
    ///
    /// * `ocm`      - On-chip memory, starting at `OCM_ORG`
    /// * `fsbl_len` - Length of the boot loader image in bytes
    pub fn set_ppk(&mut self, ocm: &'a [u8], fsbl_len: u32) {
        if self.attempted {
            return;
        }
        self.attempted = true;

        match Self::locate(ocm, fsbl_len) {
            Ok(ppk) => self.ppk = Some(ppk),
            Err(_) => cprintln!("[auth] No PPK behind boot loader of {} bytes", fsbl_len),
        }
    }

    fn locate(ocm: &'a [u8], fsbl_len: u32) -> FsblResult<RsaPubKeyView<'a>> {
        let err = FsblError::IMAGE_VERIFIER_ERR_READ_OUT_OF_BOUNDS;

        let addr = OCM_ORG.checked_add(fsbl_len).ok_or(err)?;
        let pad = addr % PPK_ALIGNMENT;
        let addr = if pad != 0 {
            addr.checked_add(PPK_ALIGNMENT - pad).ok_or(err)?
        } else {
            addr
        };

        let mut reader = ByteReader::new(ocm);
        reader.skip((addr - OCM_ORG) as usize)?;
        reader.skip(AUTH_CERT_HEADER_BYTE_SIZE)?;
        reader.skip(AUTH_CERT_MAGIC_BYTE_SIZE)?;
        RsaPubKeyView::read(&mut reader)
    }

    /// Captured PPK
    pub fn ppk(&self) -> Option<&RsaPubKeyView<'a>> {
        self.ppk.as_ref()
    }

    pub fn is_set(&self) -> bool {
        self.ppk.is_some()
    }

    /// Whether `set_ppk` has already run
    pub fn is_attempted(&self) -> bool {
        self.attempted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HDR: usize = AUTH_CERT_HEADER_BYTE_SIZE + AUTH_CERT_MAGIC_BYTE_SIZE;

    fn ocm_with_ppk(fsbl_len: usize, fill: u8) -> Vec<u8> {
        let anchor = (fsbl_len + 63) / 64 * 64;
        let mut ocm = vec![0u8; anchor + HDR + RSA_PUB_KEY_BYTE_SIZE];
        let ppk = &mut ocm[anchor + HDR..];
        ppk[..RSA_MODULUS_BYTE_SIZE].fill(fill);
        ppk[RSA_MODULUS_BYTE_SIZE..2 * RSA_MODULUS_BYTE_SIZE].fill(fill ^ 0xFF);
        ppk[2 * RSA_MODULUS_BYTE_SIZE..2 * RSA_MODULUS_BYTE_SIZE + 4]
            .copy_from_slice(&65537u32.to_le_bytes());
        ocm
    }

    #[test]
    fn test_locate_unaligned() {
        let ocm = ocm_with_ppk(1000, 0xA5);
        let mut anchor = TrustAnchor::new();
        anchor.set_ppk(&ocm, 1000);

        let ppk = anchor.ppk().unwrap();
        assert_eq!(ppk.modulus(), &[0xA5; RSA_MODULUS_BYTE_SIZE]);
        assert_eq!(ppk.modulus_ext(), &[0x5A; RSA_MODULUS_EXT_BYTE_SIZE]);
        assert_eq!(ppk.exponent(), 65537);
        assert!(core::ptr::eq(ppk.modulus().as_ptr(), &ocm[1024 + HDR]));
    }

    #[test]
    fn test_locate_aligned() {
        let ocm = ocm_with_ppk(1024, 0x3C);
        let mut anchor = TrustAnchor::new();
        anchor.set_ppk(&ocm, 1024);
        assert!(core::ptr::eq(
            anchor.ppk().unwrap().modulus().as_ptr(),
            &ocm[1024 + HDR]
        ));
    }

    #[test]
    fn test_set_once() {
        let ocm = ocm_with_ppk(100, 0x77);
        let mut anchor = TrustAnchor::new();
        anchor.set_ppk(&ocm, 100);
        let first = *anchor.ppk().unwrap();

        // A second capture with a different length must not re-scan
        anchor.set_ppk(&ocm, 0);
        let second = anchor.ppk().unwrap();
        assert!(core::ptr::eq(first.modulus(), second.modulus()));
        assert!(core::ptr::eq(first.modulus_ext(), second.modulus_ext()));
        assert_eq!(first.exponent(), second.exponent());
    }

    #[test]
    fn test_missing_anchor() {
        let ocm = vec![0u8; 1024 + HDR + RSA_PUB_KEY_BYTE_SIZE - 1];
        let mut anchor = TrustAnchor::new();
        anchor.set_ppk(&ocm, 1000);
        assert!(!anchor.is_set());
        assert!(anchor.is_attempted());
    }

    #[test]
    fn test_failed_capture_not_retried() {
        let ocm = ocm_with_ppk(0, 0xEE);
        let mut anchor = TrustAnchor::new();

        // Out of range: nothing is captured
        anchor.set_ppk(&ocm, 4000);
        assert!(!anchor.is_set());

        // A PPK sits at offset 0, but the anchor is already armed
        anchor.set_ppk(&ocm, 0);
        assert!(!anchor.is_set());
        assert!(anchor.ppk().is_none());

        anchor.set_ppk(&ocm, u32::MAX);
        assert!(!anchor.is_set());
    }
}
