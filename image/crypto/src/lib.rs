/*++

Licensed under the Apache-2.0 license.

File Name:

   lib.rs

Abstract:

    File contains crypto utilities needed to sign partitions.

--*/

mod rustcrypto;

pub use rustcrypto::RustCrypto;

use anyhow::{anyhow, bail, Context};
use fsbl_image_types::*;
use num_bigint::BigUint;
use zeroize::Zeroizing;

/// Read an RSA-2048 public key from its big-endian hex modulus
///
/// The modulus extension is derived from the modulus.
pub fn rsa_pub_key_from_hex(modulus: &str, exponent: u32) -> anyhow::Result<ImageRsaPubKey> {
    let modulus = rsa_number_from_hex(modulus).context("Invalid public key modulus")?;
    Ok(ImageRsaPubKey {
        modulus,
        modulus_ext: rsa_modulus_ext(&modulus)?,
        exponent: rsa_exponent_field(exponent),
    })
}

/// Read an RSA-2048 private key from big-endian hex modulus and private exponent
pub fn rsa_priv_key_from_hex(
    modulus: &str,
    priv_exponent: &str,
) -> anyhow::Result<Zeroizing<ImageRsaPrivKey>> {
    let modulus = rsa_number_from_hex(modulus).context("Invalid private key modulus")?;
    let priv_exponent =
        Zeroizing::new(rsa_number_from_hex(priv_exponent).context("Invalid private exponent")?);
    Ok(Zeroizing::new(ImageRsaPrivKey {
        modulus,
        priv_exponent: *priv_exponent,
    }))
}

/// Montgomery helper `2^4096 mod modulus`
pub fn rsa_modulus_ext(modulus: &RsaNumber) -> anyhow::Result<RsaNumber> {
    let n = BigUint::from_bytes_le(modulus);
    if n.bits() == 0 {
        bail!("Modulus is zero");
    }
    let r_squared = BigUint::from(1u32) << (2 * 8 * RSA2048_BYTE_SIZE);
    to_rsa_number(&(r_squared % n))
}

/// Convert a big-endian hex string to a little-endian 2048-bit operand
pub(crate) fn rsa_number_from_hex(value: &str) -> anyhow::Result<RsaNumber> {
    let value = value.trim();
    let value = value.strip_prefix("0x").unwrap_or(value);
    let bytes = if value.len() % 2 == 1 {
        hex::decode(format!("0{value}"))?
    } else {
        hex::decode(value)?
    };

    let mut result = [0u8; RSA2048_BYTE_SIZE];
    let significant = bytes
        .iter()
        .position(|b| *b != 0)
        .map_or(&bytes[bytes.len()..], |idx| &bytes[idx..]);
    if significant.len() > RSA2048_BYTE_SIZE {
        bail!("Value larger than {} bits", RSA2048_BYTE_SIZE * 8);
    }
    for (dst, src) in result.iter_mut().zip(significant.iter().rev()) {
        *dst = *src;
    }
    Ok(result)
}

pub(crate) fn to_rsa_number(value: &BigUint) -> anyhow::Result<RsaNumber> {
    let bytes = value.to_bytes_le();
    let mut result = [0u8; RSA2048_BYTE_SIZE];
    result
        .get_mut(..bytes.len())
        .ok_or_else(|| anyhow!("Value larger than {} bits", RSA2048_BYTE_SIZE * 8))?
        .copy_from_slice(&bytes);
    Ok(result)
}
