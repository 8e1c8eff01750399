/*++

Licensed under the Apache-2.0 license.

File Name:

    lib.rs

Abstract:

    File contains API and macros used by the boot loader for error handling

--*/
#![cfg_attr(not(feature = "std"), no_std)]
use core::convert::From;
use core::num::{NonZeroU32, TryFromIntError};

/// Boot loader error type
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct FsblError(pub NonZeroU32);

/// Macro to define error constants ensuring uniqueness
///
/// This macro takes a list of (name, value, doc) tuples and generates
/// constant definitions for each error code.
#[macro_export]
macro_rules! define_error_constants {
    ($(($name:ident, $value:expr, $doc:expr)),* $(,)?) => {
        $(
            #[doc = $doc]
            pub const $name: FsblError = FsblError::new_const($value);
        )*

        #[cfg(test)]
        /// Returns a vector of all defined error constants for testing uniqueness
        pub fn all_constants() -> Vec<(&'static str, u32)> {
            vec![
                $(
                    (stringify!($name), $value),
                )*
            ]
        }
    };
}

impl FsblError {
    /// Create an error from a const context. A zero value does not compile
    /// when used in a const; at runtime use `FsblError::try_from()`.
    const fn new_const(val: u32) -> Self {
        match NonZeroU32::new(val) {
            Some(val) => Self(val),
            None => panic!("FsblError cannot be 0"),
        }
    }

    define_error_constants![
        (
            DRIVER_SHA256_MAX_DATA,
            0x0002_0001,
            "SHA256 max data exceeded"
        ),
        (
            DRIVER_RSA2048_INVALID_MODULUS,
            0x0003_0001,
            "RSA2048 modulus is zero"
        ),
        (
            KAT_SHA256_DIGEST_FAILURE,
            0x0009_0001,
            "KAT Error: SHA256 digest failure"
        ),
        (
            KAT_SHA256_DIGEST_MISMATCH,
            0x0009_0002,
            "KAT Error: SHA256 digest mismatch"
        ),
        (
            KAT_RSA2048_PUBEXP_FAILURE,
            0x0009_0003,
            "KAT Error: RSA2048 public exponentiation failure"
        ),
        (
            KAT_RSA2048_PUBEXP_MISMATCH,
            0x0009_0004,
            "KAT Error: RSA2048 public exponentiation mismatch"
        ),
        (
            IMAGE_VERIFIER_ERR_READ_OUT_OF_BOUNDS,
            0x000b_0001,
            "Image Verifier Error: read past the end of the buffer"
        ),
        (
            IMAGE_VERIFIER_ERR_AUTH_CERT_TRUNCATED,
            0x000b_0002,
            "Image Verifier Error: authentication certificate truncated"
        ),
        (
            IMAGE_VERIFIER_ERR_SPK_AUTHENTICATION_FAILED,
            0x000b_0003,
            "Image Verifier Error: SPK signature authentication failed"
        ),
        (
            IMAGE_VERIFIER_ERR_PARTITION_AUTHENTICATION_FAILED,
            0x000b_0004,
            "Image Verifier Error: partition signature authentication failed"
        ),
        (
            FSBL_PARTITION_IMAGE_TOO_SMALL,
            0x0101_0001,
            "FSBL Error: signed partition smaller than an authentication certificate"
        ),
    ];
}

impl From<core::num::NonZeroU32> for crate::FsblError {
    fn from(val: core::num::NonZeroU32) -> Self {
        crate::FsblError(val)
    }
}

impl From<FsblError> for core::num::NonZeroU32 {
    fn from(val: FsblError) -> Self {
        val.0
    }
}

impl From<FsblError> for u32 {
    fn from(val: FsblError) -> Self {
        core::num::NonZeroU32::from(val).get()
    }
}

impl TryFrom<u32> for FsblError {
    type Error = TryFromIntError;
    fn try_from(val: u32) -> Result<Self, TryFromIntError> {
        match NonZeroU32::try_from(val) {
            Ok(val) => Ok(FsblError(val)),
            Err(err) => Err(err),
        }
    }
}

pub type FsblResult<T> = Result<T, FsblError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_try_from() {
        assert!(FsblError::try_from(0).is_err());
        assert_eq!(
            Ok(FsblError::IMAGE_VERIFIER_ERR_SPK_AUTHENTICATION_FAILED),
            FsblError::try_from(0x000b_0003)
        );
    }

    #[test]
    fn test_into_u32() {
        let code: u32 = FsblError::IMAGE_VERIFIER_ERR_PARTITION_AUTHENTICATION_FAILED.into();
        assert_eq!(code, 0x000b_0004);
    }

    #[test]
    fn test_error_constants_uniqueness() {
        let constants = FsblError::all_constants();
        let mut error_values = HashSet::new();
        let mut duplicates = Vec::new();

        for (name, value) in constants {
            if !error_values.insert(value) {
                duplicates.push((name, value));
            }
        }

        assert!(
            duplicates.is_empty(),
            "Found duplicate error codes: {:?}",
            duplicates
        );
    }
}
