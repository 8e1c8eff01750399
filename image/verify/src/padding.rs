/*++

Licensed under the Apache-2.0 license.

File Name:

    padding.rs

Abstract:

    PKCS#1-v1.5 signature padding reconstruction and check.

--*/

use fsbl_image_types::{pkcs1_v15_encode, ImageDigest, RsaNumber};

/// Check that a decrypted signature is the PKCS#1-v1.5 block for `digest`.
///
/// The expected block is recreated and compared from the most significant
/// byte (the end of the buffer) down, stopping at the first mismatch.
///
/// # Arguments
///
/// * `sig`    - Decrypted signature
/// * `digest` - SHA-256 digest the signature must carry
pub fn check_padding(sig: &RsaNumber, digest: &ImageDigest) -> bool {
    let expected = pkcs1_v15_encode(digest);
    sig.iter()
        .rev()
        .zip(expected.iter().rev())
        .all(|(actual, expected)| actual == expected)
}
