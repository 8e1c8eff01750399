/*++

Licensed under the Apache-2.0 license.

File Name:

   main.rs

Abstract:

    Main entry point of the partition signing application

--*/
use std::path::PathBuf;

use clap::{arg, value_parser, Command};

mod boot_image;
mod config;
mod create;
mod verify;

/// Entry point
fn main() {
    let sub_cmds = vec![
        Command::new("create")
            .about("Sign a partition")
            .arg(
                arg!(--"key-config" <FILE> "Key Configuration file")
                    .required(true)
                    .value_parser(value_parser!(PathBuf)),
            )
            .arg(
                arg!(--"partition" <FILE> "Partition binary")
                    .required(true)
                    .value_parser(value_parser!(PathBuf)),
            )
            .arg(
                arg!(--"out" <FILE> "Output file")
                    .required(true)
                    .value_parser(value_parser!(PathBuf)),
            ),
        Command::new("verify")
            .about("Authenticate a signed partition")
            .arg(
                arg!(--"key-config" <FILE> "Key Configuration file providing the PPK")
                    .required(false)
                    .value_parser(value_parser!(PathBuf)),
            )
            .arg(
                arg!(--"boot-image" <FILE> "On-chip memory image providing the PPK")
                    .required(false)
                    .conflicts_with("key-config")
                    .requires("fsbl-len")
                    .value_parser(value_parser!(PathBuf)),
            )
            .arg(
                arg!(--"fsbl-len" <U32> "Boot loader length within the boot image")
                    .required(false)
                    .value_parser(value_parser!(u32)),
            )
            .arg(
                arg!(--"image" <FILE> "Signed partition")
                    .required(true)
                    .value_parser(value_parser!(PathBuf)),
            ),
        Command::new("boot-image")
            .about("Place the PPK behind a boot loader image")
            .arg(
                arg!(--"key-config" <FILE> "Key Configuration file")
                    .required(true)
                    .value_parser(value_parser!(PathBuf)),
            )
            .arg(
                arg!(--"fsbl" <FILE> "Boot loader binary")
                    .required(true)
                    .value_parser(value_parser!(PathBuf)),
            )
            .arg(
                arg!(--"out" <FILE> "Output file")
                    .required(true)
                    .value_parser(value_parser!(PathBuf)),
            ),
    ];

    let cmd = Command::new("fsbl-image")
        .arg_required_else_help(true)
        .subcommand_required(true)
        .subcommands(sub_cmds)
        .about("Boot loader partition signing tools")
        .get_matches();

    let result = match cmd.subcommand() {
        Some(("create", args)) => create::run_cmd(args),
        Some(("verify", args)) => verify::run_cmd(args),
        Some(("boot-image", args)) => boot_image::run_cmd(args),
        _ => unreachable!(),
    };

    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(-1);
    }
}
