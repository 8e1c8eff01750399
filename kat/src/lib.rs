/*++

Licensed under the Apache-2.0 license.

File Name:

    lib.rs

Abstract:

    File contains exports for the boot loader Known Answer Tests.

--*/

#![cfg_attr(not(feature = "std"), no_std)]

mod kats_env;
mod rsa2048_kat;
mod sha256_kat;

pub use fsbl_error::{FsblError, FsblResult};
pub use kats_env::KatsEnv;
pub use rsa2048_kat::Rsa2048Kat;
pub use sha256_kat::Sha256Kat;

/// Execute Known Answer Tests
///
/// # Arguments
///
/// * `env` - Engines to test
pub fn execute_kat(env: &mut KatsEnv) -> FsblResult<()> {
    Sha256Kat::default().execute(env.sha256)?;
    Rsa2048Kat::default().execute(env.rsa2048, env.sha256)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fsbl_drivers::{Rsa2048, Sha256};

    #[test]
    fn test_execute_kat() {
        let mut sha256 = Sha256::default();
        let mut rsa2048 = Rsa2048::default();
        let mut env = KatsEnv {
            sha256: &mut sha256,
            rsa2048: &mut rsa2048,
        };
        assert_eq!(execute_kat(&mut env), Ok(()));
    }
}
