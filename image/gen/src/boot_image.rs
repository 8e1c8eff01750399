/*++

Licensed under the Apache-2.0 license.

File Name:

   boot_image.rs

Abstract:

    Builds an on-chip memory image holding a boot loader and the PPK placed behind it.

--*/
use anyhow::bail;
use fsbl_drivers::memory_layout::{OCM_ORG, OCM_SIZE};
use fsbl_image_types::*;
use zerocopy::AsBytes;

/// On-chip memory image: `fsbl | pad to 64 | AC header | magic | PPK block`
pub struct BootImageBuilder<'a> {
    fsbl: &'a [u8],
    ppk: ImageRsaPubKey,
}

impl<'a> BootImageBuilder<'a> {
    pub fn new(fsbl: &'a [u8]) -> Self {
        Self {
            fsbl,
            ppk: ImageRsaPubKey::default(),
        }
    }

    /// Set the primary platform key
    pub fn ppk(mut self, ppk: ImageRsaPubKey) -> Self {
        self.ppk = ppk;
        self
    }

    /// Offset of the PPK block from the start of on-chip memory
    pub fn ppk_offset(fsbl_len: usize) -> usize {
        let align = PPK_ALIGNMENT as usize;
        let end = OCM_ORG as usize + fsbl_len;
        let cert = (end + align - 1) / align * align;
        cert - OCM_ORG as usize + AUTH_CERT_HEADER_BYTE_SIZE + AUTH_CERT_MAGIC_BYTE_SIZE
    }

    pub fn build(&self) -> anyhow::Result<Vec<u8>> {
        let ppk_offset = Self::ppk_offset(self.fsbl.len());
        let size = ppk_offset + RSA_PUB_KEY_BYTE_SIZE;
        if size > OCM_SIZE as usize {
            bail!(
                "Boot loader of {} bytes leaves no room for the PPK in {} bytes of OCM",
                self.fsbl.len(),
                OCM_SIZE
            );
        }

        let mut image = vec![0u8; size];
        image[..self.fsbl.len()].copy_from_slice(self.fsbl);

        let header = ppk_offset - AUTH_CERT_MAGIC_BYTE_SIZE - AUTH_CERT_HEADER_BYTE_SIZE;
        image[header..header + AUTH_CERT_HEADER_BYTE_SIZE]
            .copy_from_slice(&AUTH_CERT_HEADER.to_le_bytes());
        image[ppk_offset..].copy_from_slice(self.ppk.as_bytes());

        Ok(image)
    }
}
