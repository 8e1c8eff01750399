/*++

Licensed under the Apache-2.0 license.

File Name:

    fsbl_env.rs

Abstract:

    File implements a context holding all the services utilized by the boot
    loader flows. Flows only reach the engines through this context, which
    keeps hardware details out of them and lets tests substitute a watchdog.

--*/

use fsbl_drivers::{NoWatchdog, Rsa2048, Sha256, Watchdog};

/// Boot loader Context
#[derive(Default)]
pub struct FsblEnv<W: Watchdog = NoWatchdog> {
    // SHA2-256 Engine
    pub sha256: Sha256,

    // RSA-2048 Engine
    pub rsa2048: Rsa2048,

    /// Watchdog serviced during partition authentication
    pub wdt: W,
}

impl<W: Watchdog> FsblEnv<W> {
    pub fn new(wdt: W) -> Self {
        Self {
            sha256: Sha256::default(),
            rsa2048: Rsa2048::default(),
            wdt,
        }
    }
}
