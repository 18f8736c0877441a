use crate::app::cli::Cli;
use crate::app::models::Config;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::PathBuf;

pub const CONFIG_ENV: &str = "FOLDER_RENAME_CONFIG";

/// Defaults read from `~/.config/folder_rename/config.toml`.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FileDefaults {
    #[serde(default)]
    pub verbose: bool,
    pub shell: Option<String>,
}

fn config_path() -> Option<PathBuf> {
    if let Some(path) = env::var_os(CONFIG_ENV) {
        return Some(PathBuf::from(path));
    }
    let home = dirs::home_dir()?;
    Some(
        home.join(".config")
            .join("folder_rename")
            .join("config.toml"),
    )
}

pub fn load_defaults() -> Result<FileDefaults> {
    let Some(config_path) = config_path() else {
        return Ok(FileDefaults::default());
    };

    if !config_path.exists() {
        return Ok(FileDefaults::default());
    }

    let content = fs::read_to_string(&config_path)
        .context(format!("Failed to read config at {:?}", config_path))?;

    parse_defaults(&content).context(format!("Failed to parse {:?}", config_path))
}

fn parse_defaults(content: &str) -> Result<FileDefaults> {
    Ok(toml::from_str(content)?)
}

/// Combines parsed arguments with file defaults. The CLI flag can only
/// turn verbosity on.
pub fn resolve_config(cli: Cli, defaults: &FileDefaults) -> Config {
    Config {
        keyword: cli.keyword.unwrap_or_default(),
        new_name: cli.new_name.unwrap_or_default(),
        command: cli.command,
        verbose: cli.verbose || defaults.verbose,
    }
}
