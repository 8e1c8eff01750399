/*++

Licensed under the Apache-2.0 license.

File Name:

   generator.rs

Abstract:

    Authentication certificate generator

--*/
use anyhow::bail;
use fsbl_image_types::*;
use zerocopy::AsBytes;

use crate::*;

/// Authentication certificate generator
pub struct AuthCertGenerator<Crypto: AuthCertGeneratorCrypto> {
    crypto: Crypto,
}

impl<Crypto: AuthCertGeneratorCrypto> AuthCertGenerator<Crypto> {
    /// Create an instance `AuthCertGenerator`
    pub fn new(crypto: Crypto) -> Self {
        Self { crypto }
    }

    /// Generate the certificate for a partition
    ///
    /// # Arguments
    ///
    /// * `config`    - Signing keys
    /// * `partition` - Partition data
    ///
    /// # Returns
    ///
    /// * `AuthCertificate` - Certificate with both signatures filled in
    pub fn generate(
        &self,
        config: &AuthCertGeneratorConfig,
        partition: &[u8],
    ) -> anyhow::Result<AuthCertificate> {
        if config.ppk.modulus != config.ppk_priv.modulus {
            bail!("PPK public and private keys do not match");
        }
        if config.spk.modulus != config.spk_priv.modulus {
            bail!("SPK public and private keys do not match");
        }

        let mut cert = AuthCertificate {
            ppk: config.ppk,
            spk: config.spk,
            ..Default::default()
        };

        // The PPK vouches for the SPK block
        let spk_digest = self
            .crypto
            .sha256_digest(&cert.as_bytes()[AuthCertificate::spk_range()])?;
        cert.spk_sig = self.crypto.rsa2048_sign(&spk_digest, &config.ppk_priv)?;

        // The SPK vouches for the partition and the rest of the certificate
        let partition_digest = self.partition_digest(partition, &cert);
        cert.partition_sig = self
            .crypto
            .rsa2048_sign(&partition_digest, &config.spk_priv)?;

        Ok(cert)
    }

    /// Generate a signed partition: the partition data followed by its certificate
    pub fn sign_partition(
        &self,
        config: &AuthCertGeneratorConfig,
        partition: &[u8],
    ) -> anyhow::Result<Vec<u8>> {
        let cert = self.generate(config, partition)?;
        let mut image = Vec::with_capacity(partition.len() + AUTH_CERT_BYTE_SIZE);
        image.extend_from_slice(partition);
        image.extend_from_slice(cert.as_bytes());
        Ok(image)
    }

    /// Digest covered by the partition signature
    pub fn partition_digest(&self, partition: &[u8], cert: &AuthCertificate) -> ImageDigest {
        let mut hasher = self.crypto.sha256_start();
        hasher.update(partition);
        hasher.update(&cert.as_bytes()[AuthCertificate::signed_range()]);
        hasher.finish()
    }
}
