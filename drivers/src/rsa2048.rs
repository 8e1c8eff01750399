/*++

Licensed under the Apache-2.0 license.

File Name:

    rsa2048.rs

Abstract:

    File contains API for RSA-2048 public key operations

--*/

use crate::{FsblError, FsblResult};
use num_bigint::BigUint;

pub const RSA2048_BYTE_SIZE: usize = 256;

/// 2048-bit operand, least significant byte first
pub type Rsa2048Number = [u8; RSA2048_BYTE_SIZE];

/// RSA-2048 engine
#[derive(Default)]
pub struct Rsa2048 {}

impl Rsa2048 {
    /// Perform the public key operation `sig ^ exp mod modulus`
    ///
    /// # Arguments
    ///
    /// * `sig`         - Signature to decrypt
    /// * `exp`         - Public exponent
    /// * `modulus`     - Public modulus
    /// * `_modulus_ext` - Montgomery helper (`R^2 mod N`). Only the
    ///   Montgomery engine consumes it; exponentiation here is direct.
    ///
    /// # Returns
    ///
    /// * `Rsa2048Number` - Decrypted signature block
    pub fn pubexp(
        &mut self,
        sig: &Rsa2048Number,
        exp: u32,
        modulus: &Rsa2048Number,
        _modulus_ext: &Rsa2048Number,
    ) -> FsblResult<Rsa2048Number> {
        let modulus = BigUint::from_bytes_le(modulus);
        if modulus.bits() == 0 {
            return Err(FsblError::DRIVER_RSA2048_INVALID_MODULUS);
        }

        let result = BigUint::from_bytes_le(sig).modpow(&BigUint::from(exp), &modulus);
        to_rsa2048_number(&result)
    }
}

/// Convert a big integer below 2^2048 to its little-endian operand form
pub fn to_rsa2048_number(value: &BigUint) -> FsblResult<Rsa2048Number> {
    let bytes = value.to_bytes_le();
    let mut out = [0u8; RSA2048_BYTE_SIZE];
    out.get_mut(..bytes.len())
        .ok_or(FsblError::DRIVER_RSA2048_INVALID_MODULUS)?
        .copy_from_slice(&bytes);
    Ok(out)
}
