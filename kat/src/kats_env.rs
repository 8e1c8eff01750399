// Licensed under the Apache-2.0 license

use fsbl_drivers::{Rsa2048, Sha256};

pub struct KatsEnv<'a> {
    // SHA2-256 Engine
    pub sha256: &'a mut Sha256,

    // RSA-2048 Engine
    pub rsa2048: &'a mut Rsa2048,
}
