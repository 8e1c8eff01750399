/*++

Licensed under the Apache-2.0 license.

File Name:

    verifier.rs

Abstract:

    This file is the main implementation of the partition authenticator.

--*/

use crate::*;
use fsbl_drivers::cprintln;
use fsbl_error::FsblError;

/// Partition Authenticator
///
/// Verifies the chain PPK -> SPK -> partition. The SPK taken from the
/// certificate is only used once the PPK signature over it checks out.
pub struct PartitionAuthenticator<'a, Env: ImageVerificationEnv> {
    /// Verification Environment
    env: Env,

    /// PPK captured at boot
    anchor: &'a TrustAnchor<'a>,
}

impl<'a, Env: ImageVerificationEnv> PartitionAuthenticator<'a, Env> {
    /// Create a new instance `PartitionAuthenticator`
    ///
    /// # Arguments
    ///
    /// * `env`    - Environment
    /// * `anchor` - Trust anchor holding the PPK
    pub fn new(env: Env, anchor: &'a TrustAnchor<'a>) -> Self {
        Self { env, anchor }
    }

    /// Authenticate a partition
    ///
    /// # Arguments
    ///
    /// * `cert`             - Authentication certificate
    /// * `partition_digest` - SHA-256 digest of the signed partition content
    pub fn authenticate(&mut self, cert: &[u8], partition_digest: &ImageDigest) -> FsblResult<()> {
        self.env.restart_wdt();

        let cert = AuthCertView::parse(cert)?;

        // Verify the SPK against the PPK
        self.verify_spk(&cert)?;

        // Verify the partition against the now trusted SPK
        self.verify_partition(&cert, partition_digest)?;

        Ok(())
    }

    /// Verify SPK Signature
    fn verify_spk(&mut self, cert: &AuthCertView) -> FsblResult<()> {
        let err = FsblError::IMAGE_VERIFIER_ERR_SPK_AUTHENTICATION_FAILED;

        let Some(ppk) = self.anchor.ppk() else {
            cprintln!("[auth] PPK not set");
            return Err(err);
        };

        let spk_digest = self
            .env
            .sha256_digest(cert.spk().as_bytes())
            .map_err(|_| err)?;

        let decrypted = self
            .env
            .rsa2048_pubexp(
                cert.spk_sig(),
                ppk.exponent(),
                ppk.modulus(),
                ppk.modulus_ext(),
            )
            .map_err(|_| err)?;

        if !check_padding(&decrypted, &spk_digest) {
            cprintln!("[auth] Partition SPK signature authentication failed");
            return Err(err);
        }

        Ok(())
    }

    /// Verify Partition Signature
    fn verify_partition(&mut self, cert: &AuthCertView, digest: &ImageDigest) -> FsblResult<()> {
        let err = FsblError::IMAGE_VERIFIER_ERR_PARTITION_AUTHENTICATION_FAILED;
        let spk = cert.spk();

        let decrypted = self
            .env
            .rsa2048_pubexp(
                cert.partition_sig(),
                spk.exponent(),
                spk.modulus(),
                spk.modulus_ext(),
            )
            .map_err(|_| err)?;

        if !check_padding(&decrypted, digest) {
            cprintln!("[auth] Partition signature authentication failed");
            return Err(err);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use zerocopy::AsBytes;

    const SPK_DIGEST: ImageDigest = [0xA1; SHA256_DIGEST_BYTE_SIZE];
    const PARTITION_DIGEST: ImageDigest = [0xB2; SHA256_DIGEST_BYTE_SIZE];

    const HDR: usize = AUTH_CERT_HEADER_BYTE_SIZE + AUTH_CERT_MAGIC_BYTE_SIZE;

    struct RsaCall {
        sig: RsaNumber,
        exp: u32,
        modulus: RsaNumber,
    }

    #[derive(Default)]
    struct TestEnv {
        sha_inputs: Vec<Vec<u8>>,
        sha_result: Option<FsblResult<ImageDigest>>,
        rsa_calls: Vec<RsaCall>,
        rsa_results: VecDeque<FsblResult<RsaNumber>>,
        wdt_restarts: u32,
    }

    impl ImageVerificationEnv for &mut TestEnv {
        fn sha256_digest(&mut self, data: &[u8]) -> FsblResult<ImageDigest> {
            self.sha_inputs.push(data.to_vec());
            self.sha_result.unwrap_or(Ok(SPK_DIGEST))
        }

        fn rsa2048_pubexp(
            &mut self,
            sig: &RsaNumber,
            exp: u32,
            modulus: &RsaNumber,
            _modulus_ext: &RsaNumber,
        ) -> FsblResult<RsaNumber> {
            self.rsa_calls.push(RsaCall {
                sig: *sig,
                exp,
                modulus: *modulus,
            });
            self.rsa_results
                .pop_front()
                .unwrap_or(Ok([0u8; RSA2048_BYTE_SIZE]))
        }

        fn restart_wdt(&mut self) {
            self.wdt_restarts += 1;
        }
    }

    fn ocm() -> Vec<u8> {
        let mut ocm = vec![0u8; 128 + HDR + RSA_PUB_KEY_BYTE_SIZE];
        let ppk = ImageRsaPubKey {
            modulus: [0x0F; RSA_MODULUS_BYTE_SIZE],
            exponent: rsa_exponent_field(3),
            ..Default::default()
        };
        ocm[128 + HDR..].copy_from_slice(ppk.as_bytes());
        ocm
    }

    fn cert() -> AuthCertificate {
        let mut cert = AuthCertificate::default();
        cert.spk.modulus = [0xF0; RSA_MODULUS_BYTE_SIZE];
        cert.spk.exponent = rsa_exponent_field(65537);
        cert.spk_sig = [0x5A; RSA_SIGNATURE_BYTE_SIZE];
        cert.partition_sig = [0xA5; RSA_SIGNATURE_BYTE_SIZE];
        cert
    }

    #[test]
    fn test_chain_accepted() {
        let ocm = ocm();
        let mut anchor = TrustAnchor::new();
        anchor.set_ppk(&ocm, 100);

        let cert = cert();
        let mut env = TestEnv::default();
        env.rsa_results.push_back(Ok(pkcs1_v15_encode(&SPK_DIGEST)));
        env.rsa_results
            .push_back(Ok(pkcs1_v15_encode(&PARTITION_DIGEST)));

        let mut auth = PartitionAuthenticator::new(&mut env, &anchor);
        assert_eq!(auth.authenticate(cert.as_bytes(), &PARTITION_DIGEST), Ok(()));

        assert_eq!(env.wdt_restarts, 1);
        assert_eq!(env.sha_inputs.len(), 1);
        assert_eq!(
            env.sha_inputs[0],
            cert.as_bytes()[AuthCertificate::spk_range()].to_vec()
        );

        // First the SPK signature with the PPK, then the partition with the SPK
        assert_eq!(env.rsa_calls.len(), 2);
        assert_eq!(env.rsa_calls[0].sig, cert.spk_sig);
        assert_eq!(env.rsa_calls[0].exp, 3);
        assert_eq!(env.rsa_calls[0].modulus, [0x0F; RSA_MODULUS_BYTE_SIZE]);
        assert_eq!(env.rsa_calls[1].sig, cert.partition_sig);
        assert_eq!(env.rsa_calls[1].exp, 65537);
        assert_eq!(env.rsa_calls[1].modulus, cert.spk.modulus);
    }

    #[test]
    fn test_ppk_not_set() {
        let anchor = TrustAnchor::new();
        let cert = cert();
        let mut env = TestEnv::default();

        let mut auth = PartitionAuthenticator::new(&mut env, &anchor);
        assert_eq!(
            auth.authenticate(cert.as_bytes(), &PARTITION_DIGEST),
            Err(FsblError::IMAGE_VERIFIER_ERR_SPK_AUTHENTICATION_FAILED)
        );
        assert!(env.rsa_calls.is_empty());
    }

    #[test]
    fn test_truncated_cert() {
        let ocm = ocm();
        let mut anchor = TrustAnchor::new();
        anchor.set_ppk(&ocm, 128);

        let cert = cert();
        let mut env = TestEnv::default();
        let mut auth = PartitionAuthenticator::new(&mut env, &anchor);
        assert_eq!(
            auth.authenticate(&cert.as_bytes()[..100], &PARTITION_DIGEST),
            Err(FsblError::IMAGE_VERIFIER_ERR_AUTH_CERT_TRUNCATED)
        );
        assert!(env.rsa_calls.is_empty());
    }

    #[test]
    fn test_spk_signature_invalid() {
        let ocm = ocm();
        let mut anchor = TrustAnchor::new();
        anchor.set_ppk(&ocm, 128);

        let cert = cert();
        let mut env = TestEnv::default();
        let mut bad = pkcs1_v15_encode(&SPK_DIGEST);
        bad[100] = 0x00;
        env.rsa_results.push_back(Ok(bad));
        env.rsa_results
            .push_back(Ok(pkcs1_v15_encode(&PARTITION_DIGEST)));

        let mut auth = PartitionAuthenticator::new(&mut env, &anchor);
        assert_eq!(
            auth.authenticate(cert.as_bytes(), &PARTITION_DIGEST),
            Err(FsblError::IMAGE_VERIFIER_ERR_SPK_AUTHENTICATION_FAILED)
        );

        // The SPK is never used when its signature does not check out
        assert_eq!(env.rsa_calls.len(), 1);
    }

    #[test]
    fn test_spk_digest_mismatch() {
        let ocm = ocm();
        let mut anchor = TrustAnchor::new();
        anchor.set_ppk(&ocm, 128);

        let cert = cert();
        let mut env = TestEnv {
            sha_result: Some(Ok([0xEE; SHA256_DIGEST_BYTE_SIZE])),
            ..Default::default()
        };
        env.rsa_results.push_back(Ok(pkcs1_v15_encode(&SPK_DIGEST)));

        let mut auth = PartitionAuthenticator::new(&mut env, &anchor);
        assert_eq!(
            auth.authenticate(cert.as_bytes(), &PARTITION_DIGEST),
            Err(FsblError::IMAGE_VERIFIER_ERR_SPK_AUTHENTICATION_FAILED)
        );
    }

    #[test]
    fn test_partition_signature_invalid() {
        let ocm = ocm();
        let mut anchor = TrustAnchor::new();
        anchor.set_ppk(&ocm, 128);

        let cert = cert();
        let mut env = TestEnv::default();
        env.rsa_results.push_back(Ok(pkcs1_v15_encode(&SPK_DIGEST)));
        env.rsa_results
            .push_back(Ok(pkcs1_v15_encode(&PARTITION_DIGEST)));

        let mut auth = PartitionAuthenticator::new(&mut env, &anchor);
        assert_eq!(
            auth.authenticate(cert.as_bytes(), &[0u8; SHA256_DIGEST_BYTE_SIZE]),
            Err(FsblError::IMAGE_VERIFIER_ERR_PARTITION_AUTHENTICATION_FAILED)
        );
        assert_eq!(env.rsa_calls.len(), 2);
    }

    #[test]
    fn test_collaborator_failures() {
        let ocm = ocm();
        let mut anchor = TrustAnchor::new();
        anchor.set_ppk(&ocm, 128);
        let cert = cert();

        let mut env = TestEnv {
            sha_result: Some(Err(FsblError::DRIVER_SHA256_MAX_DATA)),
            ..Default::default()
        };
        let mut auth = PartitionAuthenticator::new(&mut env, &anchor);
        assert_eq!(
            auth.authenticate(cert.as_bytes(), &PARTITION_DIGEST),
            Err(FsblError::IMAGE_VERIFIER_ERR_SPK_AUTHENTICATION_FAILED)
        );

        let mut env = TestEnv::default();
        env.rsa_results
            .push_back(Err(FsblError::DRIVER_RSA2048_INVALID_MODULUS));
        let mut auth = PartitionAuthenticator::new(&mut env, &anchor);
        assert_eq!(
            auth.authenticate(cert.as_bytes(), &PARTITION_DIGEST),
            Err(FsblError::IMAGE_VERIFIER_ERR_SPK_AUTHENTICATION_FAILED)
        );

        let mut env = TestEnv::default();
        env.rsa_results.push_back(Ok(pkcs1_v15_encode(&SPK_DIGEST)));
        env.rsa_results
            .push_back(Err(FsblError::DRIVER_RSA2048_INVALID_MODULUS));
        let mut auth = PartitionAuthenticator::new(&mut env, &anchor);
        assert_eq!(
            auth.authenticate(cert.as_bytes(), &PARTITION_DIGEST),
            Err(FsblError::IMAGE_VERIFIER_ERR_PARTITION_AUTHENTICATION_FAILED)
        );
    }
}
