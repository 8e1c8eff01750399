/*++

Licensed under the Apache-2.0 license.

File Name:

   rustcrypto.rs

Abstract:

    Partition signing backend built on the RustCrypto hashes and num-bigint.

--*/

use anyhow::bail;

use fsbl_image_gen::{AuthCertGeneratorCrypto, AuthCertGeneratorHasher};
use fsbl_image_types::*;

use num_bigint::BigUint;
use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

use crate::to_rsa_number;

#[derive(Default)]
pub struct RustCrypto {}

pub struct RustCryptoSha256Hasher(Sha256);

impl AuthCertGeneratorHasher for RustCryptoSha256Hasher {
    fn update(&mut self, data: &[u8]) {
        self.0.update(data)
    }

    fn finish(self) -> ImageDigest {
        self.0.finalize().into()
    }
}

impl AuthCertGeneratorCrypto for RustCrypto {
    type Sha256Hasher = RustCryptoSha256Hasher;

    fn sha256_start(&self) -> Self::Sha256Hasher {
        RustCryptoSha256Hasher(Sha256::default())
    }

    fn rsa2048_sign(
        &self,
        digest: &ImageDigest,
        priv_key: &ImageRsaPrivKey,
    ) -> anyhow::Result<RsaNumber> {
        let n = BigUint::from_bytes_le(&priv_key.modulus);
        if n.bits() != (RSA2048_BYTE_SIZE * 8) as u64 {
            bail!("Modulus is not {} bits", RSA2048_BYTE_SIZE * 8);
        }

        let d = Zeroizing::new(priv_key.priv_exponent);
        let message = BigUint::from_bytes_le(&pkcs1_v15_encode(digest));
        let sig = message.modpow(&BigUint::from_bytes_le(&d[..]), &n);
        to_rsa_number(&sig)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fsbl_image_fake_keys::*;

    #[test]
    fn test_sha256() {
        let digest = RustCrypto::default().sha256_digest(b"abc").unwrap();
        assert_eq!(
            hex::encode(digest),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_sign_recovers_padded_digest() {
        let digest = [0x42u8; SHA256_DIGEST_BYTE_SIZE];
        let sig = RustCrypto::default()
            .rsa2048_sign(&digest, &PPK_PRIVATE)
            .unwrap();

        let n = BigUint::from_bytes_le(&PPK_PUBLIC.modulus);
        let e = BigUint::from(PPK_PUBLIC.exponent_value());
        let decrypted = to_rsa_number(&BigUint::from_bytes_le(&sig).modpow(&e, &n)).unwrap();
        assert_eq!(decrypted, pkcs1_v15_encode(&digest));
    }

    #[test]
    fn test_sign_rejects_short_modulus() {
        let mut key = PPK_PRIVATE;
        key.modulus[RSA2048_BYTE_SIZE - 1] = 0;
        key.modulus[RSA2048_BYTE_SIZE - 2] = 0;
        assert!(RustCrypto::default()
            .rsa2048_sign(&[0u8; SHA256_DIGEST_BYTE_SIZE], &key)
            .is_err());
    }
}
