// modpack-rs: mod bundle builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{LogConfig, LogLevel, Stage};

#[test]
fn test_log_level_range() {
    assert_eq!(LogLevel::from_u8(0), Some(LogLevel::SILENT));
    assert_eq!(LogLevel::from_u8(5), Some(LogLevel::TRACE));
    assert_eq!(LogLevel::from_u8(6), None);
    assert!(LogLevel::new(9).is_err());
}

#[test]
fn test_log_level_filters() {
    let filters: Vec<_> = (0..=5)
        .filter_map(LogLevel::from_u8)
        .map(LogLevel::to_filter_string)
        .collect();
    insta::assert_snapshot!(
        filters.join(" | "),
        @"off | error | warn | info | info,modpack_rs=debug | info,modpack_rs=trace"
    );
}

#[test]
fn test_log_level_deserialize_rejects_out_of_range() {
    let ok: LogLevel = serde_json::from_str("4").unwrap();
    assert_eq!(ok, LogLevel::DEBUG);
    assert!(serde_json::from_str::<LogLevel>("7").is_err());
}

#[test]
fn test_log_config_defaults() {
    let config = LogConfig::default();
    assert_eq!(config.console_level(), LogLevel::INFO);
    assert_eq!(config.file_level(), LogLevel::TRACE);
    assert!(config.log_file().is_none());
    assert!(!config.json());
}

#[test]
fn test_stage_names() {
    let names: Vec<_> = [Stage::Fetch, Stage::Extract, Stage::Relocate]
        .iter()
        .map(ToString::to_string)
        .collect();
    insta::assert_snapshot!(names.join(","), @"fetch,extract,relocate");
}
