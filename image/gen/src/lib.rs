/*++

Licensed under the Apache-2.0 license.

File Name:

   lib.rs

Abstract:

    File contains data structures for the authentication certificate generator.

--*/

mod boot_image;
mod generator;

pub use boot_image::BootImageBuilder;
pub use generator::AuthCertGenerator;

use fsbl_image_types::*;
use zeroize::Zeroize;

pub trait AuthCertGeneratorHasher {
    fn update(&mut self, data: &[u8]);

    fn finish(self) -> ImageDigest;
}

/// Authentication Certificate Generator Crypto Trait
pub trait AuthCertGeneratorCrypto {
    type Sha256Hasher: AuthCertGeneratorHasher;

    fn sha256_start(&self) -> Self::Sha256Hasher;

    /// Calculate SHA-256 digest
    fn sha256_digest(&self, data: &[u8]) -> anyhow::Result<ImageDigest> {
        let mut hasher = self.sha256_start();
        hasher.update(data);
        Ok(hasher.finish())
    }

    /// Calculate a PKCS#1-v1.5 RSA-2048 signature over a SHA-256 digest
    fn rsa2048_sign(
        &self,
        digest: &ImageDigest,
        priv_key: &ImageRsaPrivKey,
    ) -> anyhow::Result<RsaNumber>;
}

/// Key material used to sign a partition
#[derive(Clone)]
pub struct AuthCertGeneratorConfig {
    pub ppk: ImageRsaPubKey,

    pub ppk_priv: ImageRsaPrivKey,

    pub spk: ImageRsaPubKey,

    pub spk_priv: ImageRsaPrivKey,
}

impl Drop for AuthCertGeneratorConfig {
    fn drop(&mut self) {
        self.ppk_priv.zeroize();
        self.spk_priv.zeroize();
    }
}
