/*++

Licensed under the Apache-2.0 license.

File Name:

    sha256.rs

Abstract:

    File contains API for SHA-256 Cryptography operations

--*/

use crate::{FsblError, FsblResult};
use sha2::Digest;

pub const SHA256_DIGEST_BYTE_SIZE: usize = 32;
const SHA256_MAX_DATA_SIZE: usize = 64 * 1024 * 1024;

pub type Sha256Digest = [u8; SHA256_DIGEST_BYTE_SIZE];

/// SHA-256 engine
#[derive(Default)]
pub struct Sha256 {}

impl Sha256 {
    /// Initialize multi step digest operation
    ///
    /// # Returns
    ///
    /// * `Sha256DigestOp` - Object representing the digest operation
    pub fn digest_init(&mut self) -> FsblResult<Sha256DigestOp<'_>> {
        let op = Sha256DigestOp {
            _sha: self,
            engine: sha2::Sha256::new(),
            data_size: 0,
        };

        Ok(op)
    }

    /// Calculate the digest of the buffer
    ///
    /// # Arguments
    ///
    /// * `buf` - Buffer to calculate the digest over
    pub fn digest(&mut self, buf: &[u8]) -> FsblResult<Sha256Digest> {
        let mut op = self.digest_init()?;
        op.update(buf)?;
        op.finalize()
    }
}

/// Multi step SHA-256 digest operation
pub struct Sha256DigestOp<'a> {
    /// Engine borrowed for the lifetime of the operation
    _sha: &'a mut Sha256,

    engine: sha2::Sha256,

    /// Total bytes hashed so far
    data_size: usize,
}

impl<'a> Sha256DigestOp<'a> {
    /// Update the digest with data
    ///
    /// # Arguments
    ///
    /// * `data` - Data to used to update the digest
    pub fn update(&mut self, data: &[u8]) -> FsblResult<()> {
        if self.data_size + data.len() > SHA256_MAX_DATA_SIZE {
            return Err(FsblError::DRIVER_SHA256_MAX_DATA);
        }

        self.engine.update(data);
        self.data_size += data.len();

        Ok(())
    }

    /// Finalize the digest operation
    pub fn finalize(self) -> FsblResult<Sha256Digest> {
        let mut digest = [0u8; SHA256_DIGEST_BYTE_SIZE];
        digest.copy_from_slice(&self.engine.finalize());
        Ok(digest)
    }
}
