/*++

Licensed under the Apache-2.0 license.

File Name:

    lib.rs

Abstract:

    First stage boot loader partition authentication.

--*/

#![cfg_attr(not(feature = "std"), no_std)]

mod boot_status;
pub mod flow;
mod fsbl_env;
mod kat;
mod verifier;

pub use boot_status::FsblBootStatus;
pub use fsbl_env::FsblEnv;
pub use kat::execute_kat;
pub use verifier::FsblImageVerificationEnv;
