use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::consts::APP_DIR;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) session_file: Option<PathBuf>,
    #[serde(default)]
    pub(crate) account: Option<String>,
    #[serde(default)]
    pub(crate) output_dir: Option<PathBuf>,
    #[serde(default)]
    pub(crate) timezone: Option<String>,
    #[serde(default)]
    pub(crate) base_url: Option<String>,
    #[serde(default)]
    pub(crate) user_agent: Option<String>,
    #[serde(default)]
    pub(crate) retries: Option<usize>,
    #[serde(default)]
    pub(crate) verbose: bool,
    /// Named session tokens, selected with `--account`
    #[serde(default)]
    pub(crate) accounts: HashMap<String, String>,
    /// File the config was read from
    #[serde(skip)]
    pub(crate) loaded_from: Option<PathBuf>,
}

impl Config {
    pub(crate) fn load() -> Self {
        Self::load_from(&Self::get_config_paths())
    }

    fn load_from(config_paths: &[PathBuf]) -> Self {
        // First existing file wins
        for path in config_paths {
            if path.exists()
                && let Ok(content) = fs::read_to_string(path)
            {
                match Self::parse(&content, path) {
                    Ok(config) => return config,
                    Err(e) => {
                        eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                    }
                }
            }
        }

        Self::default()
    }

    fn parse(content: &str, path: &Path) -> Result<Self, toml::de::Error> {
        let mut config = toml::from_str::<Config>(content)?;
        config.loaded_from = Some(path.to_path_buf());
        Ok(config)
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/aocfetch/config.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join(APP_DIR).join("config.toml"));
        }

        // 2. Platform config dir (XDG_CONFIG_HOME, macOS Application Support)
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join(APP_DIR).join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.aocfetch.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(format!(".{APP_DIR}.toml")));
        }

        paths
    }
}
