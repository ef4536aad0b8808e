// modpack-rs: mod bundle builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Settings --> Logging --> Command Dispatch
//!   Run (default) | List | Options | Version
//! ```

use std::process::ExitCode;
use std::sync::Arc;

use modpack_rs::cli::global::GlobalOptions;
use modpack_rs::cli::{self, Command};
use modpack_rs::cmd::list::run_list_command;
use modpack_rs::cmd::options::run_options_command;
use modpack_rs::cmd::run::run_bundle_command;
use modpack_rs::config::Settings;
use modpack_rs::config::loader::ConfigLoader;
use modpack_rs::logging::{LogConfig, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Optional settings file picked up from the working directory.
const DEFAULT_CONFIG: &str = "modpack.toml";

/// Prefix of `MODPACK_<SECTION>__<KEY>` environment overrides.
const ENV_PREFIX: &str = "MODPACK";

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    if matches!(cli.command, Some(Command::Version)) {
        handle_version_command();
        return ExitCode::SUCCESS;
    }

    let loader = match build_config_loader(&cli.global) {
        Ok(loader) => loader,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };
    let config_files = loader.loaded_files();
    let settings = match loader.build() {
        Ok(settings) => Arc::new(settings),
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let _log_guard = match init_logging(&build_log_config(&settings)) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    for (kind, path) in &config_files {
        tracing::debug!(kind = %kind, path = %path.display(), "Loaded config file");
    }

    dispatch_command(cli.command.as_ref(), settings, &config_files).await
}

fn build_log_config(settings: &Settings) -> LogConfig {
    let global = &settings.global;
    LogConfig::builder()
        .with_console_level(global.output_log_level)
        .with_file_level(global.file_log_level)
        .maybe_with_log_file(global.log_file.as_ref().map(|p| p.display().to_string()))
        .with_json(global.json_logs)
        .build()
}

async fn dispatch_command(
    command: Option<&Command>,
    settings: Arc<Settings>,
    config_files: &[(String, std::path::PathBuf)],
) -> ExitCode {
    let result = match command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Options) => {
            run_options_command(&settings, config_files);
            Ok(())
        }
        Some(Command::List) => run_list_command(&settings).await,
        Some(Command::Run) | None => run_bundle_command(settings).await.map(|_| ()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn build_config_loader(global: &GlobalOptions) -> modpack_rs::error::Result<ConfigLoader> {
    let mut loader = Settings::builder().add_toml_file_optional(DEFAULT_CONFIG);
    for path in &global.configs {
        loader = loader.add_toml_file(path);
    }
    loader = loader.with_env_prefix(ENV_PREFIX);
    for option in global.to_config_overrides() {
        loader = loader.set_override_str(&option)?;
    }
    Ok(loader)
}
