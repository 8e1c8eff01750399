/*++

Licensed under the Apache-2.0 license.

File Name:

    reader.rs

Abstract:

    Sequential reader over fixed layout binary data.

--*/

use fsbl_error::{FsblError, FsblResult};

/// Cursor over a byte buffer. A failed read leaves the cursor unchanged.
#[derive(Debug, Clone)]
pub struct ByteReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Offset of the next byte to be read
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left after the cursor
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Advance the cursor by `len` bytes
    pub fn skip(&mut self, len: usize) -> FsblResult<()> {
        self.read_bytes(len).map(|_| ())
    }

    /// Read the next `len` bytes
    pub fn read_bytes(&mut self, len: usize) -> FsblResult<&'a [u8]> {
        let err = FsblError::IMAGE_VERIFIER_ERR_READ_OUT_OF_BOUNDS;
        let end = self.pos.checked_add(len).ok_or(err)?;
        let bytes = self.buf.get(self.pos..end).ok_or(err)?;
        self.pos = end;
        Ok(bytes)
    }

    /// Read the next `N` bytes as a fixed size array
    pub fn read_array<const N: usize>(&mut self) -> FsblResult<&'a [u8; N]> {
        let bytes = self.read_bytes(N)?;
        <&[u8; N]>::try_from(bytes).map_err(|_| FsblError::IMAGE_VERIFIER_ERR_READ_OUT_OF_BOUNDS)
    }

    /// Read a little-endian `u32`
    pub fn read_u32(&mut self) -> FsblResult<u32> {
        Ok(u32::from_le_bytes(*self.read_array::<4>()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_reads() {
        let data = [1u8, 2, 3, 4, 0x78, 0x56, 0x34, 0x12, 9];
        let mut reader = ByteReader::new(&data);
        assert_eq!(reader.read_bytes(2).unwrap(), &[1, 2]);
        reader.skip(2).unwrap();
        assert_eq!(reader.read_u32().unwrap(), 0x1234_5678);
        assert_eq!(reader.position(), 8);
        assert_eq!(reader.remaining(), 1);
        assert_eq!(reader.read_array::<1>().unwrap(), &[9]);
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn test_out_of_bounds_does_not_advance() {
        let data = [0u8; 6];
        let mut reader = ByteReader::new(&data);
        reader.skip(4).unwrap();
        assert_eq!(
            reader.read_u32(),
            Err(FsblError::IMAGE_VERIFIER_ERR_READ_OUT_OF_BOUNDS)
        );
        assert_eq!(reader.position(), 4);
        assert_eq!(
            reader.skip(usize::MAX),
            Err(FsblError::IMAGE_VERIFIER_ERR_READ_OUT_OF_BOUNDS)
        );
        assert_eq!(reader.read_bytes(2).unwrap(), &[0, 0]);
    }

    #[test]
    fn test_empty_read() {
        let mut reader = ByteReader::new(&[]);
        assert_eq!(reader.read_bytes(0).unwrap(), &[] as &[u8]);
        assert!(reader.read_u32().is_err());
    }
}
