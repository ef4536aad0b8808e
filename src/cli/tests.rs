// modpack-rs: mod bundle builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::cli::{Cli, Command};
use clap::Parser;
use std::path::PathBuf;

#[test]
fn test_parse_no_command_defaults_to_run() {
    let cli = Cli::try_parse_from(["modpack"]).unwrap();
    assert!(cli.command.is_none());
    assert!(cli.global.configs.is_empty());
    assert!(cli.global.to_config_overrides().is_empty());
}

#[test]
fn test_parse_commands() {
    let cases = [
        ("run", "Run"),
        ("list", "List"),
        ("options", "Options"),
        ("version", "Version"),
    ];
    for (arg, expected) in cases {
        let cli = Cli::try_parse_from(["modpack", arg]).unwrap();
        assert_eq!(format!("{:?}", cli.command.unwrap()), expected, "arg: {arg}");
    }
}

#[test]
fn test_parse_global_options() {
    let cli = Cli::try_parse_from([
        "modpack",
        "-c",
        "a.toml",
        "--config",
        "b.toml",
        "-r",
        "/srv/pack",
        "-m",
        "mods.json",
        "-l",
        "4",
        "--json",
        "-s",
        "pipeline.progress=false",
        "list",
    ])
    .unwrap();

    assert!(matches!(cli.command, Some(Command::List)));
    assert_eq!(
        cli.global.configs,
        vec![PathBuf::from("a.toml"), PathBuf::from("b.toml")]
    );
    insta::assert_snapshot!(cli.global.to_config_overrides().join("\n"), @r"
    pipeline.progress=false
    paths/root=/srv/pack
    paths/manifest=mods.json
    global/output_log_level=4
    global/file_log_level=4
    global/json_logs=true
    ");
}

#[test]
fn test_file_log_level_overrides_log_level() {
    let cli = Cli::try_parse_from(["modpack", "-l", "1", "--file-log-level", "5"]).unwrap();
    assert_eq!(
        cli.global.to_config_overrides(),
        vec!["global/output_log_level=1", "global/file_log_level=5"]
    );
}

#[test]
fn test_parse_rejects_out_of_range_level() {
    assert!(Cli::try_parse_from(["modpack", "-l", "6"]).is_err());
    assert!(Cli::try_parse_from(["modpack", "--file-log-level", "9"]).is_err());
}

#[test]
fn test_parse_rejects_unknown_command() {
    assert!(Cli::try_parse_from(["modpack", "build"]).is_err());
}
